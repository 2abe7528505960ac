//! # Campaign
//!
//! The escrow state machine. Each campaign is a pool of pledged tokens with
//! an immutable goal, deadline, and organizer; its lifecycle state is derived
//! on every call from the ledger timestamp and the accounting:
//!
//! - **Open** — `now < ends_at`: `pledge` and `refund_pledge` are allowed.
//! - **Ended-Unfunded** — `now >= ends_at`, `pledged < goal`: `full_refund`.
//! - **Ended-Funded** — `now >= ends_at`, `pledged >= goal`: organizer `claim`.
//! - **Claimed** — terminal; every further mutation fails.
//!
//! A call landing exactly at `ends_at` is post-deadline; reaching exactly
//! the goal counts as funded.
//!
//! Every operation that moves value out commits its ledger mutation before
//! issuing the outbound transfer.

use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env};

use crate::events;
use crate::registry::RegistryClient;
use crate::storage::{
    get_pledge, get_registry_addr, get_token_addr, has_campaign, has_registry_addr, load_campaign,
    load_config, load_state, save_campaign, save_state, set_pledge, set_registry_addr,
    set_token_addr,
};
use crate::types::{CampaignConfig, CampaignInfo, CampaignState};
use crate::Error;

#[contract]
pub struct Campaign;

#[contractimpl]
impl Campaign {
    /// Wire the campaign contract to its registry and the funding token.
    ///
    /// Must be called exactly once after deployment; subsequent calls fail
    /// with `Error::AlreadyInitialized`.
    pub fn initialize(env: Env, registry: Address, token: Address) {
        if has_registry_addr(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        set_registry_addr(&env, &registry);
        set_token_addr(&env, &token);
    }

    /// Create the pool for a freshly assigned id.
    ///
    /// Callable only by the registry; input validation happens there. The
    /// id, organizer, goal, and deadline are immutable from this point on.
    pub fn create(env: Env, id: u64, organizer: Address, goal: i128, ends_at: u64) {
        let registry = get_registry_addr(&env);
        registry.require_auth();

        if has_campaign(&env, id) {
            panic_with_error!(&env, Error::CampaignExists);
        }

        save_campaign(
            &env,
            &CampaignConfig {
                id,
                organizer,
                goal,
                ends_at,
            },
            &CampaignState {
                pledged: 0,
                claimed: false,
            },
        );
    }

    /// Commit `amount` of the funding token to the pool.
    ///
    /// Fails with `Error::DeadlinePassed` once the campaign has ended and
    /// with `Error::InsufficientFunds` when no positive amount accompanies
    /// the call.
    pub fn pledge(env: Env, id: u64, pledger: Address, amount: i128) {
        pledger.require_auth();

        let config = load_config(&env, id);
        let mut state = load_state(&env, id);

        if env.ledger().timestamp() >= config.ends_at {
            panic_with_error!(&env, Error::DeadlinePassed);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::InsufficientFunds);
        }

        let token_client = token::Client::new(&env, &get_token_addr(&env));
        token_client.transfer(&pledger, &env.current_contract_address(), &amount);

        let balance = get_pledge(&env, id, &pledger);
        set_pledge(&env, id, &pledger, balance + amount);
        state.pledged += amount;
        save_state(&env, id, &state);

        events::pledged(&env, id, amount, &pledger);
    }

    /// Return `amount` to the pledger while the campaign is still open.
    ///
    /// A request exceeding the recorded balance is rejected with
    /// `Error::InsufficientFunds`, not truncated.
    pub fn refund_pledge(env: Env, id: u64, pledger: Address, amount: i128) {
        pledger.require_auth();

        let config = load_config(&env, id);
        let mut state = load_state(&env, id);

        if env.ledger().timestamp() >= config.ends_at {
            panic_with_error!(&env, Error::DeadlinePassed);
        }

        let balance = get_pledge(&env, id, &pledger);
        if amount <= 0 || amount > balance {
            panic_with_error!(&env, Error::InsufficientFunds);
        }

        // Commit the ledger mutation before funds leave custody.
        set_pledge(&env, id, &pledger, balance - amount);
        state.pledged -= amount;
        save_state(&env, id, &state);

        let token_client = token::Client::new(&env, &get_token_addr(&env));
        token_client.transfer(&env.current_contract_address(), &pledger, &amount);

        events::refunded_pledge(&env, id, amount, &pledger);
    }

    /// Return the pledger's entire balance after an unfunded deadline.
    ///
    /// Fails with `Error::DeadlineNotReached` while the campaign is open and
    /// with `Error::GoalAchieved` when the goal was met; a full refund is
    /// only a failure-path remedy.
    pub fn full_refund(env: Env, id: u64, pledger: Address) {
        pledger.require_auth();

        let config = load_config(&env, id);
        let mut state = load_state(&env, id);

        if env.ledger().timestamp() < config.ends_at {
            panic_with_error!(&env, Error::DeadlineNotReached);
        }
        if state.pledged >= config.goal {
            panic_with_error!(&env, Error::GoalAchieved);
        }

        let balance = get_pledge(&env, id, &pledger);

        // Commit the ledger mutation before funds leave custody.
        set_pledge(&env, id, &pledger, 0);
        state.pledged -= balance;
        save_state(&env, id, &state);

        let token_client = token::Client::new(&env, &get_token_addr(&env));
        token_client.transfer(&env.current_contract_address(), &pledger, &balance);

        events::full_refund(&env, id, balance, &pledger);
    }

    /// Transfer the entire pool to the organizer after a funded deadline.
    ///
    /// Checks, in order: the caller is the organizer (`Error::AccessDenied`),
    /// the deadline has passed (`Error::DeadlineNotReached`), the pool was
    /// not claimed before (`Error::AlreadyClaimed`), and the goal was reached
    /// (`Error::GoalNotAchieved`). On success the claimed flag is committed
    /// before the transfer, the registry's mirror is updated through
    /// `on_claimed`, and a `CampaignClaimed` event is emitted.
    pub fn claim(env: Env, id: u64, caller: Address) {
        caller.require_auth();

        let config = load_config(&env, id);
        if caller != config.organizer {
            panic_with_error!(&env, Error::AccessDenied);
        }

        let mut state = load_state(&env, id);

        if env.ledger().timestamp() < config.ends_at {
            panic_with_error!(&env, Error::DeadlineNotReached);
        }
        if state.claimed {
            panic_with_error!(&env, Error::AlreadyClaimed);
        }
        if state.pledged < config.goal {
            panic_with_error!(&env, Error::GoalNotAchieved);
        }

        // Commit the claimed flag before funds leave custody.
        state.claimed = true;
        save_state(&env, id, &state);

        let token_client = token::Client::new(&env, &get_token_addr(&env));
        token_client.transfer(&env.current_contract_address(), &config.organizer, &state.pledged);

        RegistryClient::new(&env, &get_registry_addr(&env))
            .on_claimed(&env.current_contract_address(), &id);

        events::campaign_claimed(&env, id, state.pledged, &config.organizer);
    }

    /// Full read view of a campaign.
    pub fn get_campaign(env: Env, id: u64) -> CampaignInfo {
        load_campaign(&env, id)
    }

    /// Currently-held balance for `pledger`, 0 when none.
    pub fn pledge_of(env: Env, id: u64, pledger: Address) -> i128 {
        get_pledge(&env, id, &pledger)
    }
}
