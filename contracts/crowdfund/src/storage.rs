//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers. The [`Registry`] and
//! [`Campaign`] contracts are separate instances, so each has its own key
//! enum and its own storage space.
//!
//! ## Registry
//!
//! | Key (tier)                  | Type             | Description              |
//! |-----------------------------|------------------|--------------------------|
//! | `CampaignAddr` (instance)   | `Address`        | Campaign contract        |
//! | `CampaignCount` (instance)  | `u64`            | Last assigned id         |
//! | `Record(id)` (persistent)   | `CampaignRecord` | Directory entry          |
//!
//! ## Campaign
//!
//! | Key (tier)                  | Type             | Description              |
//! |-----------------------------|------------------|--------------------------|
//! | `RegistryAddr` (instance)   | `Address`        | Registry contract        |
//! | `TokenAddr` (instance)      | `Address`        | Funding token            |
//! | `Config(id)` (persistent)   | `CampaignConfig` | Immutable configuration  |
//! | `State(id)` (persistent)    | `CampaignState`  | Mutable accounting       |
//! | `Pledge(id, addr)` (persistent) | `i128`       | Per-pledger balance      |
//!
//! Instance TTL is bumped by 7 days whenever it falls below 1 day remaining;
//! persistent TTL by 30 days whenever it falls below 7 days remaining.
//!
//! [`Registry`]: crate::Registry
//! [`Campaign`]: crate::Campaign

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{CampaignConfig, CampaignInfo, CampaignRecord, CampaignState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// Registry contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryKey {
    /// Address of the campaign contract the registry creates pools on
    /// (Instance).
    CampaignAddr,
    /// Last assigned campaign id; ids start at 1 and are never reused
    /// (Instance).
    CampaignCount,
    /// Directory entry keyed by id (Persistent).
    Record(u64),
}

/// Campaign contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignKey {
    /// Address of the registry permitted to create campaigns (Instance).
    RegistryAddr,
    /// Token all pledges are denominated in (Instance).
    TokenAddr,
    /// Immutable campaign configuration keyed by id (Persistent).
    Config(u64),
    /// Mutable campaign state keyed by id (Persistent).
    State(u64),
    /// Currently-held pledge balance per pledger (Persistent).
    Pledge(u64, Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Registry: instance ───────────────────────────────────────────────

pub fn has_campaign_addr(env: &Env) -> bool {
    env.storage().instance().has(&RegistryKey::CampaignAddr)
}

pub fn set_campaign_addr(env: &Env, campaign: &Address) {
    env.storage()
        .instance()
        .set(&RegistryKey::CampaignAddr, campaign);
    bump_instance(env);
}

/// Campaign contract address. Fails with `NotInitialized` before `init`.
pub fn get_campaign_addr(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&RegistryKey::CampaignAddr)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Allocates the next sequential campaign id. The first id is 1.
pub fn next_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let last: u64 = env
        .storage()
        .instance()
        .get(&RegistryKey::CampaignCount)
        .unwrap_or(0);
    let id = last + 1;
    env.storage()
        .instance()
        .set(&RegistryKey::CampaignCount, &id);
    id
}

// ── Registry: directory ──────────────────────────────────────────────

fn bump_record(env: &Env, key: &RegistryKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn save_record(env: &Env, record: &CampaignRecord) {
    let key = RegistryKey::Record(record.id);
    env.storage().persistent().set(&key, record);
    bump_record(env, &key);
}

/// Directory entry for `id`, or `None` for an id that was never assigned.
pub fn load_record(env: &Env, id: u64) -> Option<CampaignRecord> {
    let key = RegistryKey::Record(id);
    let record: Option<CampaignRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_record(env, &key);
    }
    record
}

// ── Campaign: instance ───────────────────────────────────────────────

pub fn has_registry_addr(env: &Env) -> bool {
    env.storage().instance().has(&CampaignKey::RegistryAddr)
}

pub fn set_registry_addr(env: &Env, registry: &Address) {
    env.storage()
        .instance()
        .set(&CampaignKey::RegistryAddr, registry);
    bump_instance(env);
}

pub fn get_registry_addr(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&CampaignKey::RegistryAddr)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_token_addr(env: &Env, token: &Address) {
    env.storage().instance().set(&CampaignKey::TokenAddr, token);
    bump_instance(env);
}

pub fn get_token_addr(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&CampaignKey::TokenAddr)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

// ── Campaign: per-id entries ─────────────────────────────────────────

fn bump_entry(env: &Env, key: &CampaignKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_campaign(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&CampaignKey::Config(id))
}

/// Save both the immutable config and the initial mutable state for a new
/// campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    let config_key = CampaignKey::Config(config.id);
    let state_key = CampaignKey::State(config.id);
    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_entry(env, &config_key);
    bump_entry(env, &state_key);
}

/// Load only the immutable campaign configuration.
/// Fails with `CampaignNotFound` for an unknown id.
pub fn load_config(env: &Env, id: u64) -> CampaignConfig {
    let key = CampaignKey::Config(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_entry(env, &key);
    config
}

/// Load only the mutable campaign state.
pub fn load_state(env: &Env, id: u64) -> CampaignState {
    let key = CampaignKey::State(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_entry(env, &key);
    state
}

/// Save only the mutable campaign state (the pledge/refund/claim write path).
pub fn save_state(env: &Env, id: u64, state: &CampaignState) {
    let key = CampaignKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_entry(env, &key);
}

/// Load the full `CampaignInfo` by combining config and state.
pub fn load_campaign(env: &Env, id: u64) -> CampaignInfo {
    let config = load_config(env, id);
    let state = load_state(env, id);
    CampaignInfo {
        id: config.id,
        organizer: config.organizer,
        goal: config.goal,
        ends_at: config.ends_at,
        pledged: state.pledged,
        claimed: state.claimed,
    }
}

/// Currently-held balance for `pledger`, 0 when no entry exists.
pub fn get_pledge(env: &Env, id: u64, pledger: &Address) -> i128 {
    let key = CampaignKey::Pledge(id, pledger.clone());
    let balance: Option<i128> = env.storage().persistent().get(&key);
    match balance {
        Some(balance) => {
            bump_entry(env, &key);
            balance
        }
        None => 0,
    }
}

/// Set `pledger`'s balance; a zero balance removes the entry.
pub fn set_pledge(env: &Env, id: u64, pledger: &Address, balance: i128) {
    let key = CampaignKey::Pledge(id, pledger.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        bump_entry(env, &key);
    }
}
