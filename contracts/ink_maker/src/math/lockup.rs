use bitmap::{
    error::BitmapResult,
    math::{casting::Cast, safe_math::SafeMath},
};
use soroban_sdk::{log, panic_with_error, Env};

use crate::errors::Errors;

pub const SECONDS_PER_MONTH: u64 = 2_592_000;
pub const MAX_LOCKUP_SECONDS: u64 = 7 * SECONDS_PER_MONTH;

/// Rejects lockups beyond the seven month maximum before any state is
/// touched.
pub fn check_lockup(env: &Env, lockup_seconds: u64) {
    if lockup_seconds > MAX_LOCKUP_SECONDS {
        log!(env, "InkMaker: calc_lockup_multiplier: max lockup exceeded");
        panic_with_error!(env, Errors::InvalidLockup);
    }
}

/// Shares granted for a principal locked for `lockup_seconds`:
/// `principal * (1 + lockup / month)`, evaluated in the principal's own
/// fixed point so that a zero lockup yields exactly the principal.
pub fn calc_shares(env: &Env, principal: u128, lockup_seconds: u64) -> BitmapResult<u128> {
    let weight: u128 = SECONDS_PER_MONTH
        .safe_add(lockup_seconds, env)?
        .cast(env)?;

    principal
        .safe_mul(weight, env)?
        .safe_div(SECONDS_PER_MONTH as u128, env)
}
