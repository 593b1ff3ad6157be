use bitmap::{
    constants::ONE_DAY,
    error::BitmapResult,
    math::{bn::U256, safe_math::SafeMath},
};
use soroban_sdk::Env;

use crate::math::PRECISION;

/// Daily emission for a given amount of outstanding shares.
///
/// With `x = total_shares / soft_cap`, the curve is
/// `((x - 1)^3 + 1) * max_reward_per_day`: zero at zero shares, exactly
/// `max_reward_per_day` at the soft cap, strictly increasing throughout.
/// The cap is soft - beyond it the curve keeps growing.
///
/// Evaluated branch-wise in U256 so every intermediate stays unsigned:
/// below the cap `1 - (1 - x)^3`, above it `1 + (x - 1)^3`.
pub fn reward_per_day(
    env: &Env,
    total_shares: u128,
    soft_cap: u128,
    max_reward_per_day: u128,
) -> BitmapResult<u128> {
    let prec = U256::from(PRECISION);
    let prec_cubed = prec.safe_mul(prec, env)?.safe_mul(prec, env)?;

    let x = U256::from(total_shares)
        .safe_mul(prec, env)?
        .safe_div(U256::from(soft_cap), env)?;

    let curve = if x <= prec {
        let d = prec.safe_sub(x, env)?;
        let d_cubed = d.safe_mul(d, env)?.safe_mul(d, env)?;
        prec_cubed.safe_sub(d_cubed, env)?
    } else {
        let d = x.safe_sub(prec, env)?;
        let d_cubed = d.safe_mul(d, env)?.safe_mul(d, env)?;
        prec_cubed.safe_add(d_cubed, env)?
    };

    curve
        .safe_mul(U256::from(max_reward_per_day), env)?
        .safe_div(prec_cubed, env)?
        .try_to_u128()
}

pub fn reward_per_second(
    env: &Env,
    total_shares: u128,
    soft_cap: u128,
    max_reward_per_day: u128,
) -> BitmapResult<u128> {
    reward_per_day(env, total_shares, soft_cap, max_reward_per_day)?
        .safe_div(ONE_DAY as u128, env)
}

/// Growth of the reward-per-share accumulator over `elapsed` seconds.
///
/// Computed as a single wide expression,
/// `reward_per_day * elapsed * PRECISION / (86_400 * total_shares)`,
/// so no precision is thrown away before the final division. Callers must
/// guarantee `total_shares > 0`.
pub fn accumulator_delta(
    env: &Env,
    total_shares: u128,
    soft_cap: u128,
    max_reward_per_day: u128,
    elapsed: u64,
) -> BitmapResult<u128> {
    let emitted_per_day = reward_per_day(env, total_shares, soft_cap, max_reward_per_day)?;

    U256::from(emitted_per_day)
        .safe_mul(U256::from(elapsed), env)?
        .safe_mul(U256::from(PRECISION), env)?
        .safe_div(
            U256::from(ONE_DAY).safe_mul(U256::from(total_shares), env)?,
            env,
        )?
        .try_to_u128()
}
