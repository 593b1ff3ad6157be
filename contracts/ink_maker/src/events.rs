use soroban_sdk::{Address, Env, Symbol};

pub struct InkMakerEvents {}

impl InkMakerEvents {
    /// Emitted once when the engine is initialized
    ///
    /// - topics - `["initialization", admin: Address]`
    /// - data - `[ts: u64, ink_token: Address, deposit_token: Address]`
    pub fn initialization(
        env: &Env,
        ts: u64,
        admin: Address,
        ink_token: Address,
        deposit_token: Address,
    ) {
        let topics = (Symbol::new(env, "initialization"), admin);
        env.events().publish(topics, (ts, ink_token, deposit_token));
    }

    /// Emitted when a user opens a stake entry
    ///
    /// - topics - `["stake", user: Address]`
    /// - data - `[ts: u64, entry_id: u64, principal: i128, lockup_seconds: u64, shares: u128, total_shares: u128]`
    #[allow(clippy::too_many_arguments)]
    pub fn stake(
        env: &Env,
        ts: u64,
        user: Address,
        entry_id: u64,
        principal: i128,
        lockup_seconds: u64,
        shares: u128,
        total_shares: u128,
    ) {
        let topics = (Symbol::new(env, "stake"), user);
        env.events().publish(
            topics,
            (ts, entry_id, principal, lockup_seconds, shares, total_shares),
        );
    }

    /// Emitted whenever a settlement mints pending rewards
    ///
    /// - topics - `["claim", user: Address]`
    /// - data - `[ts: u64, amount: i128]`
    pub fn claim(env: &Env, ts: u64, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "claim"), user);
        env.events().publish(topics, (ts, amount));
    }

    /// Emitted when a stake entry is withdrawn
    ///
    /// - topics - `["withdraw", user: Address]`
    /// - data - `[ts: u64, entry_id: u64, principal: i128, total_shares: u128]`
    pub fn withdraw(
        env: &Env,
        ts: u64,
        user: Address,
        entry_id: u64,
        principal: i128,
        total_shares: u128,
    ) {
        let topics = (Symbol::new(env, "withdraw"), user);
        env.events()
            .publish(topics, (ts, entry_id, principal, total_shares));
    }
}
