//! # Crowdfunding Escrow Contracts
//!
//! Two Soroban contracts cooperating over one funding lifecycle:
//!
//! | Contract     | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | [`Registry`] | Creates campaigns, assigns ids, mirrors claim status  |
//! | [`Campaign`] | Escrows pledges, enforces goal/deadline, pays out     |
//!
//! ## Lifecycle
//!
//! A caller asks the [`Registry`] to `start` a campaign with a goal and a
//! deadline. The registry validates both, allocates the next sequential id,
//! and creates the campaign on the [`Campaign`] contract with the caller as
//! organizer. Pledgers then interact with the campaign directly: `pledge`
//! and `refund_pledge` while the campaign is open, `full_refund` after an
//! unfunded deadline, and the organizer's `claim` after a funded one. A
//! successful claim notifies the registry through the restricted
//! `on_claimed` callback, which flips the directory's denormalized `claimed`
//! mirror; the campaign's own flag remains the authoritative copy.
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]; event emission to
//! [`events`]. The entry point modules contain the state machine checks and
//! nothing else. Campaign state (Open / Ended-Unfunded / Ended-Funded /
//! Claimed) is derived from the ledger timestamp and the accounting on every
//! call rather than stored, so it can never drift from the books.

#![no_std]

use soroban_sdk::contracterror;

mod campaign;
mod events;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use campaign::{Campaign, CampaignClient};
pub use events::{CampaignClaimed, CampaignStarted, FullRefund, Pledged, RefundedPledge};
pub use registry::{Registry, RegistryClient, MAX_DURATION};
pub use types::{CampaignConfig, CampaignInfo, CampaignRecord, CampaignState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Funding goal must be positive.
    InvalidGoal        = 1,
    /// Deadline must be in the future and within `MAX_DURATION`.
    InvalidDeadline    = 2,
    /// Caller is not permitted to perform this operation.
    AccessDenied       = 3,
    /// The campaign deadline has passed; pledges and refunds are closed.
    DeadlinePassed     = 4,
    /// The campaign is still open; claims and full refunds must wait.
    DeadlineNotReached = 5,
    /// Zero or over-balance amount on a pledge or refund.
    InsufficientFunds  = 6,
    /// The goal was reached; full refunds are unavailable.
    GoalAchieved       = 7,
    /// The goal was not reached; the pool cannot be claimed.
    GoalNotAchieved    = 8,
    /// The pool was already claimed.
    AlreadyClaimed     = 9,
    AlreadyInitialized = 10,
    NotInitialized     = 11,
    CampaignExists     = 12,
    CampaignNotFound   = 13,
}
