use bitmap::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    math::safe_math::SafeMath,
};
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized,
    Config,
    RewardState,
    EntryCounter,
    Entry(u64),
    UserEntries(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Reward token minted by the engine. The engine must be its sole minter.
    pub ink_token: Address,
    /// Collateral taken into custody while a stake entry is active.
    pub deposit_token: Address,
    pub max_reward_per_day: i128,
    pub soft_cap: u128,
}

/// Global accrual state. `reward_per_share` is an 18-decimal fixed-point
/// index and never decreases.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardState {
    pub total_shares: u128,
    pub reward_per_share: u128,
    pub last_update_ts: u64,
}

/// Per-user accrual snapshot, created lazily on first stake.
///
/// `reward_debt` is the value of `reward_per_share` at the user's last
/// settlement; the pending reward is
/// `share_balance * (reward_per_share - reward_debt)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserAccount {
    pub share_balance: u128,
    pub reward_debt: u128,
}

/// One principal-lockup commitment. Immutable after creation except for the
/// one-way `withdrawn` flag; entries are kept forever for auditability.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeEntry {
    pub owner: Address,
    pub principal: i128,
    pub lockup_duration: u64,
    pub lockup_expiry: u64,
    pub shares: u128,
    pub withdrawn: bool,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().instance().set(&DataKey::Config, &config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .expect("InkMaker: Config not set");

    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    config
}

pub fn save_reward_state(env: &Env, state: &RewardState) {
    env.storage().persistent().set(&DataKey::RewardState, state);
    env.storage().persistent().extend_ttl(
        &DataKey::RewardState,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_reward_state(env: &Env) -> RewardState {
    let state = env
        .storage()
        .persistent()
        .get(&DataKey::RewardState)
        .expect("InkMaker: Reward state not set");

    env.storage().persistent().extend_ttl(
        &DataKey::RewardState,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    state
}

pub fn get_user_account(env: &Env, key: &Address) -> UserAccount {
    let account = match env.storage().persistent().get::<_, UserAccount>(key) {
        Some(account) => account,
        None => UserAccount {
            share_balance: 0,
            reward_debt: 0,
        },
    };

    if env.storage().persistent().has(key) {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    account
}

pub fn save_user_account(env: &Env, key: &Address, account: &UserAccount) {
    env.storage().persistent().set(key, account);
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Hand out the next globally increasing entry id, starting at zero.
pub fn next_entry_id(env: &Env) -> u64 {
    let id = env
        .storage()
        .instance()
        .get(&DataKey::EntryCounter)
        .unwrap_or(0u64);
    let next = id
        .safe_add(1, env)
        .unwrap_or_else(|err| panic_with_error!(env, err));
    env.storage().instance().set(&DataKey::EntryCounter, &next);

    id
}

pub fn get_entry(env: &Env, entry_id: u64) -> Option<StakeEntry> {
    let key = DataKey::Entry(entry_id);
    let entry = env.storage().persistent().get(&key);

    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    entry
}

pub fn save_entry(env: &Env, entry_id: u64, entry: &StakeEntry) {
    let key = DataKey::Entry(entry_id);
    env.storage().persistent().set(&key, entry);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_user_entry_ids(env: &Env, key: &Address) -> Vec<u64> {
    let storage_key = DataKey::UserEntries(key.clone());
    let ids = env
        .storage()
        .persistent()
        .get(&storage_key)
        .unwrap_or(Vec::new(env));

    if env.storage().persistent().has(&storage_key) {
        env.storage().persistent().extend_ttl(
            &storage_key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    ids
}

pub fn save_user_entry_ids(env: &Env, key: &Address, ids: &Vec<u64>) {
    let storage_key = DataKey::UserEntries(key.clone());
    env.storage().persistent().set(&storage_key, ids);
    env.storage().persistent().extend_ttl(
        &storage_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub mod utils {
    use super::*;

    pub fn is_initialized(e: &Env) -> bool {
        e.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&DataKey::Initialized, &true);
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
