//! # Registry
//!
//! The factory/directory contract. It validates creation inputs, assigns
//! monotonically increasing campaign ids, creates the pool on the campaign
//! contract, and keeps one [`CampaignRecord`] per id. The record's `claimed`
//! flag is a denormalized mirror for external queries, maintained through
//! the restricted [`Registry::on_claimed`] callback; the campaign's own flag
//! is authoritative.

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

use crate::campaign::CampaignClient;
use crate::events;
use crate::storage::{
    get_campaign_addr, has_campaign_addr, load_record, next_campaign_id, save_record,
    set_campaign_addr,
};
use crate::types::CampaignRecord;
use crate::Error;

/// Upper bound on how far in the future a campaign deadline may lie,
/// in seconds (30 days).
pub const MAX_DURATION: u64 = 30 * 86_400;

#[contract]
pub struct Registry;

#[contractimpl]
impl Registry {
    /// Wire the registry to the campaign contract it creates pools on.
    ///
    /// Must be called exactly once after deployment; subsequent calls fail
    /// with `Error::AlreadyInitialized`.
    pub fn init(env: Env, campaign: Address) {
        if has_campaign_addr(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        set_campaign_addr(&env, &campaign);
    }

    /// Start a new campaign and return its id.
    ///
    /// - `organizer` must authorize and becomes the only identity permitted
    ///   to claim the pool.
    /// - `goal` must be positive (`Error::InvalidGoal`).
    /// - `ends_at` must be strictly in the future and at most
    ///   [`MAX_DURATION`] away (`Error::InvalidDeadline`).
    ///
    /// Ids are sequential starting at 1 and never reused. Creation cannot
    /// fail once the inputs are validated.
    pub fn start(env: Env, organizer: Address, goal: i128, ends_at: u64) -> u64 {
        organizer.require_auth();

        let target = get_campaign_addr(&env);

        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidGoal);
        }

        let now = env.ledger().timestamp();
        if ends_at <= now || ends_at > now + MAX_DURATION {
            panic_with_error!(&env, Error::InvalidDeadline);
        }

        let id = next_campaign_id(&env);

        CampaignClient::new(&env, &target).create(&id, &organizer, &goal, &ends_at);

        save_record(
            &env,
            &CampaignRecord {
                id,
                target: Some(target),
                claimed: false,
            },
        );

        events::campaign_started(&env, id, ends_at, goal, &organizer);
        id
    }

    /// Mark the directory entry for `id` as claimed.
    ///
    /// Callable only by the campaign contract registered under `id`: the
    /// caller address must both authorize (granted automatically for a
    /// direct contract invoker) and match the stored target handle. Any
    /// other caller, including the organizer, fails with
    /// `Error::AccessDenied`.
    pub fn on_claimed(env: Env, campaign: Address, id: u64) {
        campaign.require_auth();

        let mut record = load_record(&env, id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::AccessDenied));
        if record.target != Some(campaign) {
            panic_with_error!(&env, Error::AccessDenied);
        }

        record.claimed = true;
        save_record(&env, &record);
    }

    /// Directory entry for `id`.
    ///
    /// An id that was never assigned yields a record whose `target` is
    /// `None` rather than a failure.
    pub fn campaigns(env: Env, id: u64) -> CampaignRecord {
        load_record(&env, id).unwrap_or(CampaignRecord {
            id,
            target: None,
            claimed: false,
        })
    }

    /// The creation-time bound on deadline distance, in seconds.
    pub fn max_duration() -> u64 {
        MAX_DURATION
    }
}
