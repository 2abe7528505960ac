//! # Events
//!
//! Typed event payloads and their publication helpers. Every event is
//! published under a `(symbol_short!(..), campaign_id)` topic pair so
//! off-chain consumers can filter a single campaign's stream.
//!
//! | Event              | Topic        | Emitted by  | When                  |
//! |--------------------|--------------|-------------|-----------------------|
//! | [`CampaignStarted`]| `started`    | Registry    | `start`               |
//! | [`Pledged`]        | `pledged`    | Campaign    | `pledge`              |
//! | [`RefundedPledge`] | `refunded`   | Campaign    | `refund_pledge`       |
//! | [`FullRefund`]     | `full_rfnd`  | Campaign    | `full_refund`         |
//! | [`CampaignClaimed`]| `claimed`    | Campaign    | `claim`               |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A campaign was created and assigned an id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStarted {
    pub id: u64,
    pub ends_at: u64,
    pub goal: i128,
    pub organizer: Address,
}

/// Value moved into a campaign's custody.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pledged {
    pub amount: i128,
    pub pledger: Address,
}

/// A pledger reduced their commitment while the campaign was still open.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedPledge {
    pub amount: i128,
    pub pledger: Address,
}

/// A pledger recovered their entire balance after an unfunded deadline.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FullRefund {
    pub amount: i128,
    pub pledger: Address,
}

/// The organizer withdrew the full pool after a funded deadline.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClaimed {
    pub amount: i128,
    pub organizer: Address,
}

pub fn campaign_started(env: &Env, id: u64, ends_at: u64, goal: i128, organizer: &Address) {
    env.events().publish(
        (symbol_short!("started"), id),
        CampaignStarted {
            id,
            ends_at,
            goal,
            organizer: organizer.clone(),
        },
    );
}

pub fn pledged(env: &Env, id: u64, amount: i128, pledger: &Address) {
    env.events().publish(
        (symbol_short!("pledged"), id),
        Pledged {
            amount,
            pledger: pledger.clone(),
        },
    );
}

pub fn refunded_pledge(env: &Env, id: u64, amount: i128, pledger: &Address) {
    env.events().publish(
        (symbol_short!("refunded"), id),
        RefundedPledge {
            amount,
            pledger: pledger.clone(),
        },
    );
}

pub fn full_refund(env: &Env, id: u64, amount: i128, pledger: &Address) {
    env.events().publish(
        (symbol_short!("full_rfnd"), id),
        FullRefund {
            amount,
            pledger: pledger.clone(),
        },
    );
}

pub fn campaign_claimed(env: &Env, id: u64, amount: i128, organizer: &Address) {
    env.events().publish(
        (symbol_short!("claimed"), id),
        CampaignClaimed {
            amount,
            organizer: organizer.clone(),
        },
    );
}
