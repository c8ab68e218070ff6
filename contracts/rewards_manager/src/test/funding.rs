use soroban_sdk::{symbol_short, testutils::Address as _, vec, Address, IntoVal, String};

use super::{setup, DURATION, SCALE};
use crate::{ManagerError, RewardsManager, RewardsManagerClient, ZERO_ACCOUNT};

#[test]
fn initialize_records_configuration() {
    let s = setup();
    assert_eq!(s.manager.owner(), s.owner);
    assert_eq!(s.manager.rewards_contract(), s.farming.address);
    assert_eq!(s.manager.reward_token(), s.reward_token.address);
    assert_eq!(s.manager.gift_index(), 0);
}

#[test]
fn initialize_publishes_owner_and_rewards_contract() {
    let s = setup();
    let manager = RewardsManagerClient::new(&s.env, &s.env.register_contract(None, RewardsManager));
    manager.initialize(&s.owner, &s.farming.address, &s.reward_token.address, &0);

    assert_eq!(
        s.last_events(2),
        vec![
            &s.env,
            (
                manager.address.clone(),
                (symbol_short!("own_xfer"),).into_val(&s.env),
                (None::<Address>, s.owner.clone()).into_val(&s.env),
            ),
            (
                manager.address.clone(),
                (symbol_short!("rwd_set"),).into_val(&s.env),
                s.farming.address.clone().into_val(&s.env),
            ),
        ]
    );
}

#[test]
fn initialize_twice_fails() {
    let s = setup();
    let result = s
        .manager
        .try_initialize(&s.owner, &s.farming.address, &s.reward_token.address, &0);
    assert_eq!(result, Err(Ok(ManagerError::AlreadyInitialized)));
}

#[test]
fn initialize_rejects_zero_addresses() {
    let s = setup();
    let zero = Address::from_string(&String::from_str(&s.env, ZERO_ACCOUNT));
    let manager = RewardsManagerClient::new(&s.env, &s.env.register_contract(None, RewardsManager));

    assert_eq!(
        manager.try_initialize(&s.owner, &zero, &s.reward_token.address, &0),
        Err(Ok(ManagerError::ZeroAddress))
    );
    assert_eq!(
        manager.try_initialize(&s.owner, &s.farming.address, &zero, &0),
        Err(Ok(ManagerError::ZeroAddress))
    );
}

#[test]
fn fresh_distributor_counts_as_finished() {
    let s = setup();
    assert!(s.manager.is_reward_period_finished());
    assert_eq!(s.manager.period_finish(), 0);
    assert_eq!(s.manager.period_finish(), s.farming.period_finish(&0));
}

#[test]
fn start_without_balance_fails() {
    let s = setup();
    assert_eq!(
        s.manager.try_start_next_rewards_period(),
        Err(Ok(ManagerError::ZeroTokenBalance))
    );
}

#[test]
fn start_forwards_whole_balance_and_notifies() {
    let s = setup();
    s.deliver(1_000);

    assert_eq!(s.manager.start_next_rewards_period(), 1_000);

    assert_eq!(s.reward_token.balance(&s.manager.address), 0);
    assert_eq!(s.reward_token.balance(&s.farming.address), 1_000);
    assert_eq!(s.farming.period_finish(&0), s.now() + DURATION);
    assert_eq!(s.farming.token_rewards(&0).reward_rate, 1_000 * SCALE / DURATION as i128);
    assert!(!s.manager.is_reward_period_finished());

    assert_eq!(
        s.last_events(1),
        vec![
            &s.env,
            (
                s.manager.address.clone(),
                (symbol_short!("started"), 0_u32).into_val(&s.env),
                1_000_i128.into_val(&s.env),
            ),
        ]
    );
}

#[test]
fn start_while_active_fails() {
    let s = setup();
    s.deliver(1_000);
    s.manager.start_next_rewards_period();
    s.advance(1);

    // An empty manager reports the balance first.
    assert_eq!(
        s.manager.try_start_next_rewards_period(),
        Err(Ok(ManagerError::ZeroTokenBalance))
    );

    s.deliver(1_000);
    assert_eq!(
        s.manager.try_start_next_rewards_period(),
        Err(Ok(ManagerError::RewardsPeriodNotFinished))
    );
    assert_eq!(s.reward_token.balance(&s.manager.address), 1_000);
}

#[test]
fn anyone_starts_next_period_once_finished() {
    let s = setup();
    s.deliver(1_000);
    s.manager.start_next_rewards_period();

    s.advance(DURATION);
    s.deliver(500);
    assert!(s.manager.is_reward_period_finished());

    // No auth is involved; the client does not even name a caller.
    assert_eq!(s.manager.start_next_rewards_period(), 500);
    assert!(!s.manager.is_reward_period_finished());
    assert_eq!(s.farming.period_finish(&0), s.now() + DURATION);
}

#[test]
fn out_of_funding_date_tracks_custody() {
    let s = setup();
    assert_eq!(s.manager.out_of_funding_date(), 0);

    s.deliver(1_000);
    assert_eq!(s.manager.out_of_funding_date(), s.now() + DURATION);

    s.manager.start_next_rewards_period();
    let finish = s.farming.period_finish(&0);
    assert_eq!(s.manager.out_of_funding_date(), finish);

    s.advance(10);
    s.deliver(1_000);
    assert_eq!(s.manager.out_of_funding_date(), finish + DURATION);

    s.advance(DURATION * 3);
    assert_eq!(s.manager.out_of_funding_date(), s.now() + DURATION);
}

#[test]
fn owner_sets_period_duration_between_periods() {
    let s = setup();
    let stranger = Address::generate(&s.env);

    assert_eq!(
        s.manager.try_set_rewards_period_duration(&stranger, &1_000),
        Err(Ok(ManagerError::Unauthorized))
    );

    s.manager.set_rewards_period_duration(&s.owner, &1_000);
    assert_eq!(s.farming.token_rewards(&0).duration, 1_000);

    s.deliver(1_000);
    s.manager.start_next_rewards_period();
    assert_eq!(s.farming.period_finish(&0), s.now() + 1_000);

    // The distributor refuses while the period runs.
    assert!(s.manager.try_set_rewards_period_duration(&s.owner, &50).is_err());
    assert_eq!(s.farming.token_rewards(&0).duration, 1_000);
}

#[test]
fn owner_repoints_rewards_contract() {
    let s = setup();
    let stranger = Address::generate(&s.env);
    let next = Address::generate(&s.env);

    assert_eq!(
        s.manager.try_set_rewards_contract(&stranger, &next),
        Err(Ok(ManagerError::Unauthorized))
    );

    s.manager.set_rewards_contract(&s.owner, &next);
    assert_eq!(s.manager.rewards_contract(), next);

    assert_eq!(
        s.last_events(1),
        vec![
            &s.env,
            (
                s.manager.address.clone(),
                (symbol_short!("rwd_set"),).into_val(&s.env),
                next.clone().into_val(&s.env),
            ),
        ]
    );
}
