use soroban_sdk::{contractclient, Address, Env};

use crate::msg::{ConfigResponse, EntriesResponse, StakeResponse, UserResponse, WithdrawResponse};
use crate::storage::{RewardState, StakeEntry};

#[contractclient(name = "InkMakerClient")]
pub trait InkMakerTrait {
    fn initialize(
        env: Env,
        admin: Address,
        ink_token: Address,
        deposit_token: Address,
        max_reward_per_day: i128,
        soft_cap: u128,
    );

    // ################################################################
    //                             Users
    // ################################################################

    /// Settle the sender's pending rewards, then lock `amount` of the
    /// deposit token for `lockup_seconds`. A zero amount is a pure claim.
    fn stake(env: Env, sender: Address, lockup_seconds: u64, amount: i128) -> StakeResponse;

    /// Settle the sender's pending rewards, tombstone the entry and hand
    /// its principal back.
    fn withdraw(env: Env, sender: Address, entry_id: u64) -> WithdrawResponse;

    // ################################################################
    //                             Queries
    // ################################################################

    fn calc_lockup_multiplier(env: Env, amount: i128, lockup_seconds: u64) -> i128;

    fn get_current_reward_per_second(env: Env) -> i128;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Address;

    fn query_reward_state(env: Env) -> RewardState;

    fn query_user(env: Env, address: Address) -> UserResponse;

    fn query_entry(env: Env, entry_id: u64) -> StakeEntry;

    fn query_user_entries(env: Env, address: Address) -> EntriesResponse;
}
