use bitmap::{
    error::{BitmapResult, ErrorCode},
    safe_decrement, safe_increment, validate,
};
use soroban_sdk::{log, Env};

use crate::storage::{RewardState, UserAccount};

/// Credit a fresh entry's shares to the user and the global total.
pub fn add_shares(
    env: &Env,
    state: &mut RewardState,
    user: &mut UserAccount,
    shares: u128,
) -> BitmapResult {
    safe_increment!(user.share_balance, shares, env);
    safe_increment!(state.total_shares, shares, env);

    Ok(())
}

/// Remove a withdrawn entry's shares from the user and the global total.
pub fn remove_shares(
    env: &Env,
    state: &mut RewardState,
    user: &mut UserAccount,
    shares: u128,
) -> BitmapResult {
    validate!(
        env,
        user.share_balance >= shares && state.total_shares >= shares,
        ErrorCode::InsufficientFunds,
        "share balance {} below entry shares {}",
        user.share_balance,
        shares
    )?;

    safe_decrement!(user.share_balance, shares, env);
    safe_decrement!(state.total_shares, shares, env);

    Ok(())
}
