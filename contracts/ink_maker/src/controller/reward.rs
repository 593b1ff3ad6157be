use bitmap::{
    error::BitmapResult,
    math::{bn::U256, casting::Cast, safe_math::SafeMath},
};
use soroban_sdk::Env;

use crate::math::{emission, PRECISION};
use crate::storage::{Config, RewardState, UserAccount};

/// Roll the global reward-per-share index forward to `now`.
///
/// While no shares are outstanding the index stays put (and no division
/// happens); the timestamp still advances so idle periods are never paid
/// out retroactively. Idempotent within a single instant.
pub fn update_global(
    env: &Env,
    config: &Config,
    state: &mut RewardState,
    now: u64,
) -> BitmapResult {
    let elapsed = now.safe_sub(state.last_update_ts, env)?;

    if elapsed > 0 && state.total_shares > 0 {
        let delta = emission::accumulator_delta(
            env,
            state.total_shares,
            config.soft_cap,
            config.max_reward_per_day.cast(env)?,
            elapsed,
        )?;
        state.reward_per_share = state.reward_per_share.safe_add(delta, env)?;
    }

    state.last_update_ts = now;

    Ok(())
}

/// Settle a user against the global index: bring the index up to `now`,
/// compute the reward accrued since the user's last settlement and reset
/// their snapshot. Returns the amount the caller must mint to the user.
///
/// One read-modify-write of a single global index, no matter how many
/// stakers exist - this is what keeps stake/claim/withdraw O(1).
pub fn settle(
    env: &Env,
    config: &Config,
    state: &mut RewardState,
    user: &mut UserAccount,
    now: u64,
) -> BitmapResult<i128> {
    update_global(env, config, state, now)?;

    let accrued_index = state.reward_per_share.safe_sub(user.reward_debt, env)?;

    let pending = if user.share_balance > 0 && accrued_index > 0 {
        U256::from(user.share_balance)
            .safe_mul(U256::from(accrued_index), env)?
            .safe_div(U256::from(PRECISION), env)?
            .try_to_u128()?
            .cast(env)?
    } else {
        0i128
    };

    user.reward_debt = state.reward_per_share;

    Ok(pending)
}
