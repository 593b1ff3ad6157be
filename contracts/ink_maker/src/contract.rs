use bitmap::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    math::{casting::Cast, safe_math::SafeMath},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    controller,
    errors::Errors,
    events::InkMakerEvents,
    ink_maker::InkMakerTrait,
    math::{emission, lockup},
    msg::{ConfigResponse, EntriesResponse, StakeResponse, UserResponse, WithdrawResponse},
    storage::{
        get_config, get_entry, get_reward_state, get_user_account, get_user_entry_ids,
        next_entry_id, save_config, save_entry, save_reward_state, save_user_account,
        save_user_entry_ids,
        utils::{is_initialized, set_initialized},
        Config, RewardState, StakeEntry, UserAccount,
    },
};

contractmeta!(
    key = "Description",
    val = "Lockup-weighted staking engine emitting Ink on a soft-capped cubic curve"
);

#[contract]
pub struct InkMaker;

#[contractimpl]
impl InkMakerTrait for InkMaker {
    fn initialize(
        env: Env,
        admin: Address,
        ink_token: Address,
        deposit_token: Address,
        max_reward_per_day: i128,
        soft_cap: u128,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "InkMaker: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, Errors::AlreadyInitialized);
        }

        if max_reward_per_day <= 0 || soft_cap == 0 {
            log!(
                &env,
                "InkMaker: Initialize: emission constants must be positive"
            );
            panic_with_error!(&env, Errors::InvalidConfig);
        }

        set_initialized(&env);

        let now = env.ledger().timestamp();

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                ink_token: ink_token.clone(),
                deposit_token: deposit_token.clone(),
                max_reward_per_day,
                soft_cap,
            },
        );
        save_reward_state(
            &env,
            &RewardState {
                total_shares: 0,
                reward_per_share: 0,
                last_update_ts: now,
            },
        );

        InkMakerEvents::initialization(&env, now, admin, ink_token, deposit_token);
    }

    // ################################################################
    //                             Users
    // ################################################################

    fn stake(env: Env, sender: Address, lockup_seconds: u64, amount: i128) -> StakeResponse {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount < 0 {
            log!(&env, "InkMaker: Stake: negative amount is not allowed");
            panic_with_error!(&env, Errors::InvalidAmount);
        }

        let config = get_config(&env);
        let mut state = get_reward_state(&env);
        let mut user = get_user_account(&env, &sender);
        let now = env.ledger().timestamp();

        let minted_reward = settle_rewards(&env, &config, &mut state, &mut user, &sender, now);

        let entry_id = if amount > 0 {
            // the lockup only matters when an entry is opened; a pure
            // claim must settle no matter what is passed here
            lockup::check_lockup(&env, lockup_seconds);

            let shares = lockup::calc_shares(
                &env,
                amount.cast(&env).unwrap_or_else(|err| panic_with_error!(&env, err)),
                lockup_seconds,
            )
            .unwrap_or_else(|err| panic_with_error!(&env, err));

            let entry_id = next_entry_id(&env);
            let entry = StakeEntry {
                owner: sender.clone(),
                principal: amount,
                lockup_duration: lockup_seconds,
                lockup_expiry: now
                    .safe_add(lockup_seconds, &env)
                    .unwrap_or_else(|err| panic_with_error!(&env, err)),
                shares,
                withdrawn: false,
            };

            controller::stake::add_shares(&env, &mut state, &mut user, shares)
                .unwrap_or_else(|err| panic_with_error!(&env, err));

            save_entry(&env, entry_id, &entry);
            let mut entry_ids = get_user_entry_ids(&env, &sender);
            entry_ids.push_back(entry_id);
            save_user_entry_ids(&env, &sender, &entry_ids);

            token::Client::new(&env, &config.deposit_token).transfer(
                &sender,
                &env.current_contract_address(),
                &amount,
            );

            InkMakerEvents::stake(
                &env,
                now,
                sender.clone(),
                entry_id,
                amount,
                lockup_seconds,
                shares,
                state.total_shares,
            );

            Some(entry_id)
        } else {
            None
        };

        save_user_account(&env, &sender, &user);
        save_reward_state(&env, &state);

        StakeResponse {
            entry_id,
            minted_reward,
        }
    }

    fn withdraw(env: Env, sender: Address, entry_id: u64) -> WithdrawResponse {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut entry = get_entry(&env, entry_id).unwrap_or_else(|| {
            log!(&env, "InkMaker: Withdraw: no stake entry with this id");
            panic_with_error!(&env, Errors::EntryNotFound);
        });

        if entry.owner != sender {
            log!(&env, "InkMaker: Withdraw: sender does not own this entry");
            panic_with_error!(&env, Errors::NotOwner);
        }
        if entry.withdrawn {
            log!(&env, "InkMaker: Withdraw: already claimed");
            panic_with_error!(&env, Errors::AlreadyWithdrawn);
        }

        let config = get_config(&env);
        let mut state = get_reward_state(&env);
        let mut user = get_user_account(&env, &sender);
        let now = env.ledger().timestamp();

        let minted_reward = settle_rewards(&env, &config, &mut state, &mut user, &sender, now);

        entry.withdrawn = true;
        controller::stake::remove_shares(&env, &mut state, &mut user, entry.shares)
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        save_entry(&env, entry_id, &entry);
        save_user_account(&env, &sender, &user);
        save_reward_state(&env, &state);

        token::Client::new(&env, &config.deposit_token).transfer(
            &env.current_contract_address(),
            &sender,
            &entry.principal,
        );

        InkMakerEvents::withdraw(
            &env,
            now,
            sender,
            entry_id,
            entry.principal,
            state.total_shares,
        );

        WithdrawResponse {
            principal: entry.principal,
            minted_reward,
        }
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn calc_lockup_multiplier(env: Env, amount: i128, lockup_seconds: u64) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount < 0 {
            log!(
                &env,
                "InkMaker: calc_lockup_multiplier: negative amount is not allowed"
            );
            panic_with_error!(&env, Errors::InvalidAmount);
        }
        lockup::check_lockup(&env, lockup_seconds);

        let shares = lockup::calc_shares(
            &env,
            amount.cast(&env).unwrap_or_else(|err| panic_with_error!(&env, err)),
            lockup_seconds,
        )
        .unwrap_or_else(|err| panic_with_error!(&env, err));

        shares
            .cast(&env)
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn get_current_reward_per_second(env: Env) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let state = get_reward_state(&env);

        let rate = emission::reward_per_second(
            &env,
            state.total_shares,
            config.soft_cap,
            config
                .max_reward_per_day
                .cast(&env)
                .unwrap_or_else(|err| panic_with_error!(&env, err)),
        )
        .unwrap_or_else(|err| panic_with_error!(&env, err));

        rate.cast(&env)
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn query_config(env: Env) -> ConfigResponse {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env).admin
    }

    fn query_reward_state(env: Env) -> RewardState {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_reward_state(&env)
    }

    fn query_user(env: Env, address: Address) -> UserResponse {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        UserResponse {
            account: get_user_account(&env, &address),
        }
    }

    fn query_entry(env: Env, entry_id: u64) -> StakeEntry {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        query_entry_internal(&env, entry_id)
    }

    fn query_user_entries(env: Env, address: Address) -> EntriesResponse {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut entries = Vec::new(&env);
        for entry_id in get_user_entry_ids(&env, &address).iter() {
            entries.push_back(query_entry_internal(&env, entry_id));
        }

        EntriesResponse { entries }
    }
}

fn query_entry_internal(env: &Env, entry_id: u64) -> StakeEntry {
    get_entry(env, entry_id).unwrap_or_else(|| {
        log!(env, "InkMaker: Query entry: no stake entry with this id");
        panic_with_error!(env, Errors::EntryNotFound);
    })
}

/// Settle the user against the global index and mint whatever is pending.
///
/// The mint is the final step of the settlement; if it traps, the whole
/// invocation (accumulator update included) is rolled back by the host.
fn settle_rewards(
    env: &Env,
    config: &Config,
    state: &mut RewardState,
    user: &mut UserAccount,
    recipient: &Address,
    now: u64,
) -> i128 {
    let pending = controller::reward::settle(env, config, state, user, now)
        .unwrap_or_else(|err| panic_with_error!(env, err));

    if pending > 0 {
        token::StellarAssetClient::new(env, &config.ink_token).mint(recipient, &pending);
        InkMakerEvents::claim(env, now, recipient.clone(), pending);
    }

    pending
}
