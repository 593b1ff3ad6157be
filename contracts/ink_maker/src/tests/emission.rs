extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

use super::setup::{
    deploy_ink_maker_contract, deploy_token_contract, FIFTH_OF_CAP, FIFTH_OF_CAP_DAILY,
    MAX_REWARD_PER_DAY, ONE_DAY, ONE_MONTH, SOFT_CAP, TWO_FIFTHS_OF_CAP_DAILY,
};

#[test]
fn reward_rate_hits_max_at_soft_cap() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    assert_eq!(ink_maker.get_current_reward_per_second(), 0);

    deposit_asset.mint(&user, &(SOFT_CAP as i128));
    ink_maker.stake(&user, &0u64, &(SOFT_CAP as i128));

    assert_eq!(
        ink_maker.get_current_reward_per_second(),
        MAX_REWARD_PER_DAY / ONE_DAY as i128
    );
}

#[test]
fn reward_rate_below_the_cap_follows_the_cubic_curve() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    deposit_asset.mint(&user, &FIFTH_OF_CAP);
    ink_maker.stake(&user, &0u64, &FIFTH_OF_CAP);

    assert_eq!(
        ink_maker.get_current_reward_per_second(),
        FIFTH_OF_CAP_DAILY / ONE_DAY as i128
    );
}

#[test]
fn single_staker_collects_a_full_day_of_emission() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    deposit_asset.mint(&user, &FIFTH_OF_CAP);
    ink_maker.stake(&user, &0u64, &FIFTH_OF_CAP);

    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    // a zero-amount stake is a pure claim
    let response = ink_maker.stake(&user, &0u64, &0i128);
    assert_eq!(response.minted_reward, FIFTH_OF_CAP_DAILY);
    assert_eq!(ink_token.balance(&user), FIFTH_OF_CAP_DAILY);

    // settling again within the same instant mints nothing
    let response = ink_maker.stake(&user, &0u64, &0i128);
    assert_eq!(response.minted_reward, 0);
    assert_eq!(ink_token.balance(&user), FIFTH_OF_CAP_DAILY);
}

#[test]
fn lockup_weighted_staker_collects_at_the_weighted_rate() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    deposit_asset.mint(&user, &FIFTH_OF_CAP);
    // one month of lockup doubles the shares, so the curve is evaluated
    // at two fifths of the cap
    ink_maker.stake(&user, &ONE_MONTH, &FIFTH_OF_CAP);

    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    ink_maker.stake(&user, &0u64, &0i128);
    assert_eq!(ink_token.balance(&user), TWO_FIFTHS_OF_CAP_DAILY);
}

#[test]
fn equal_stakers_split_the_emission_regardless_of_settle_order() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    deposit_asset.mint(&user1, &FIFTH_OF_CAP);
    deposit_asset.mint(&user2, &FIFTH_OF_CAP);

    ink_maker.stake(&user1, &0u64, &FIFTH_OF_CAP);
    ink_maker.stake(&user2, &0u64, &FIFTH_OF_CAP);

    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    // settle the later staker first
    ink_maker.stake(&user2, &0u64, &0i128);
    ink_maker.stake(&user1, &0u64, &0i128);

    assert_eq!(ink_token.balance(&user1), TWO_FIFTHS_OF_CAP_DAILY / 2);
    assert_eq!(ink_token.balance(&user2), TWO_FIFTHS_OF_CAP_DAILY / 2);
}

#[test]
fn late_joiner_only_earns_from_their_entry_onwards() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    deposit_asset.mint(&user1, &FIFTH_OF_CAP);
    deposit_asset.mint(&user2, &FIFTH_OF_CAP);

    // day one: user1 alone
    ink_maker.stake(&user1, &0u64, &FIFTH_OF_CAP);
    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });
    ink_maker.stake(&user1, &0u64, &0i128);
    assert_eq!(ink_token.balance(&user1), FIFTH_OF_CAP_DAILY);

    // day two: user2 joins with equal shares, the curve moves up to the
    // two-fifths operating point and the day is split evenly
    ink_maker.stake(&user2, &0u64, &FIFTH_OF_CAP);
    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    ink_maker.stake(&user2, &0u64, &0i128);
    assert_eq!(ink_token.balance(&user2), TWO_FIFTHS_OF_CAP_DAILY / 2);

    ink_maker.stake(&user1, &0u64, &0i128);
    assert_eq!(
        ink_token.balance(&user1),
        FIFTH_OF_CAP_DAILY + TWO_FIFTHS_OF_CAP_DAILY / 2
    );
}

#[test]
fn pure_claim_settles_even_with_an_over_max_lockup_argument() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    deposit_asset.mint(&user, &FIFTH_OF_CAP);
    ink_maker.stake(&user, &0u64, &FIFTH_OF_CAP);

    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    // no entry is opened, so the lockup argument is never validated and
    // the settlement goes through
    let response = ink_maker.stake(&user, &(8 * ONE_MONTH), &0i128);
    assert_eq!(response.entry_id, None);
    assert_eq!(response.minted_reward, FIFTH_OF_CAP_DAILY);
    assert_eq!(ink_token.balance(&user), FIFTH_OF_CAP_DAILY);
}

#[test]
fn idle_time_with_no_shares_pays_nothing() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (ink_token, _) = deploy_token_contract(&env, &admin);
    let (deposit_token, deposit_asset) = deploy_token_contract(&env, &admin);

    let ink_maker =
        deploy_ink_maker_contract(&env, &admin, &ink_token.address, &deposit_token.address);

    // a week passes with nothing staked
    env.ledger().with_mut(|li| {
        li.timestamp += 7 * ONE_DAY;
    });

    deposit_asset.mint(&user, &FIFTH_OF_CAP);
    ink_maker.stake(&user, &0u64, &FIFTH_OF_CAP);
    let response = ink_maker.stake(&user, &0u64, &0i128);

    assert_eq!(response.minted_reward, 0);
    assert_eq!(ink_token.balance(&user), 0);
}
