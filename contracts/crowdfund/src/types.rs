//! # Types
//!
//! Shared data structures for the registry directory and the campaign ledger.
//!
//! ## Config / State split
//!
//! A campaign is stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every pledge, refund, and the claim.
//!
//! Pledges and refunds are the high-frequency writes, so the mutable entry is
//! kept to the two fields they touch. The public API exposes the
//! reconstructed [`CampaignInfo`] for reads.
//!
//! ## Derived states
//!
//! There is deliberately no stored status field. The lifecycle is derived
//! from `ends_at` versus the ledger timestamp and from `pledged` versus
//! `goal`:
//!
//! ```text
//! Open ──deadline──► Ended-Unfunded (pledged < goal)   full_refund
//!      └─deadline──► Ended-Funded   (pledged >= goal) ──claim──► Claimed
//! ```
//!
//! `Claimed` is terminal; `claimed` never transitions back to `false`.

use soroban_sdk::{contracttype, Address};

/// Immutable campaign configuration, written once when the registry creates
/// the campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    /// The creator; the only identity permitted to claim.
    pub organizer: Address,
    /// Funding target, strictly positive.
    pub goal: i128,
    /// Ledger timestamp at which the campaign ends. A call landing exactly
    /// at `ends_at` is post-deadline.
    pub ends_at: u64,
}

/// Mutable campaign state, updated on pledges, refunds, and the claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Running total of currently-held pledge value. Equals the sum of all
    /// per-pledger balances until the claim; after the claim it records the
    /// total raised.
    pub pledged: i128,
    /// Set true exactly once by a successful claim.
    pub claimed: bool,
}

/// Full view of a campaign, reconstructed from the split
/// [`CampaignConfig`] + [`CampaignState`] storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInfo {
    pub id: u64,
    pub organizer: Address,
    pub goal: i128,
    pub ends_at: u64,
    pub pledged: i128,
    pub claimed: bool,
}

/// Directory entry held by the registry, one per assigned id.
///
/// `claimed` here is a denormalized mirror maintained through the restricted
/// `on_claimed` callback; the campaign's own flag is authoritative. Unknown
/// ids resolve to a record with `target: None` rather than a failure.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignRecord {
    pub id: u64,
    /// Address of the campaign contract holding this pool, or `None` for an
    /// id that was never assigned.
    pub target: Option<Address>,
    pub claimed: bool,
}
