extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{CampaignClaimed, CampaignStarted, FullRefund, Pledged, RefundedPledge};
use crate::{Campaign, CampaignClient, Registry, RegistryClient};

fn setup() -> (
    Env,
    RegistryClient<'static>,
    CampaignClient<'static>,
    token::Client<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let registry_id = env.register(Registry, ());
    let campaign_id = env.register(Campaign, ());
    let registry = RegistryClient::new(&env, &registry_id);
    let campaign = CampaignClient::new(&env, &campaign_id);

    let token_admin = Address::generate(&env);
    let token_addr = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::Client::new(&env, &token_addr.address());

    registry.init(&campaign_id);
    campaign.initialize(&registry_id, &token.address);

    (env, registry, campaign, token)
}

fn mint(env: &Env, token: &token::Client, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

#[test]
fn test_campaign_started_event() {
    let (env, registry, _campaign, _token) = setup();
    let organizer = Address::generate(&env);
    let goal = 1000i128;
    let ends_at = env.ledger().timestamp() + 30;

    let id = registry.start(&organizer, &goal, &ends_at);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, registry.address);
    let expected_topics = vec![
        &env,
        symbol_short!("started").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignStarted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignStarted {
            id,
            ends_at,
            goal,
            organizer: organizer.clone(),
        }
    );
}

#[test]
fn test_pledged_event() {
    let (env, registry, campaign, token) = setup();
    let organizer = Address::generate(&env);
    let pledger = Address::generate(&env);
    mint(&env, &token, &pledger, 1500);

    let id = registry.start(&organizer, &1000, &(env.ledger().timestamp() + 30));
    campaign.pledge(&id, &pledger, &1500);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, campaign.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pledged").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Pledged = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Pledged {
            amount: 1500,
            pledger: pledger.clone(),
        }
    );
}

#[test]
fn test_refunded_pledge_event() {
    let (env, registry, campaign, token) = setup();
    let organizer = Address::generate(&env);
    let pledger = Address::generate(&env);
    mint(&env, &token, &pledger, 1500);

    let id = registry.start(&organizer, &1000, &(env.ledger().timestamp() + 30));
    campaign.pledge(&id, &pledger, &1500);
    campaign.refund_pledge(&id, &pledger, &500);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, campaign.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RefundedPledge = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RefundedPledge {
            amount: 500,
            pledger: pledger.clone(),
        }
    );
}

#[test]
fn test_full_refund_event() {
    let (env, registry, campaign, token) = setup();
    let organizer = Address::generate(&env);
    let pledger = Address::generate(&env);
    mint(&env, &token, &pledger, 900);

    let id = registry.start(&organizer, &1000, &(env.ledger().timestamp() + 30));
    campaign.pledge(&id, &pledger, &900);

    env.ledger().with_mut(|li| {
        li.timestamp += 40;
    });

    campaign.full_refund(&id, &pledger);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, campaign.address);
    let expected_topics = vec![
        &env,
        symbol_short!("full_rfnd").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FullRefund = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FullRefund {
            amount: 900,
            pledger: pledger.clone(),
        }
    );
}

#[test]
fn test_campaign_claimed_event() {
    let (env, registry, campaign, token) = setup();
    let organizer = Address::generate(&env);
    let pledger = Address::generate(&env);
    mint(&env, &token, &pledger, 1500);

    let id = registry.start(&organizer, &1000, &(env.ledger().timestamp() + 30));
    campaign.pledge(&id, &pledger, &1500);

    env.ledger().with_mut(|li| {
        li.timestamp += 40;
    });

    campaign.claim(&id, &organizer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, campaign.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignClaimed {
            amount: 1500,
            organizer: organizer.clone(),
        }
    );
}
