use soroban_sdk::{token, Address, Env};

use crate::contract::{InkMaker, InkMakerClient};

pub const ONE_DAY: u64 = 86_400;
pub const ONE_MONTH: u64 = 2_592_000;

/// 1M tokens at 7 decimals.
pub const SOFT_CAP: u128 = 10_000_000_000_000;
/// 1k tokens per day at 7 decimals.
pub const MAX_REWARD_PER_DAY: i128 = 10_000_000_000;
pub const FIFTH_OF_CAP: i128 = (SOFT_CAP / 5) as i128;

/// Daily emission with a fifth of the cap staked:
/// `((0.2 - 1)^3 + 1) * max = 0.488 * max`.
pub const FIFTH_OF_CAP_DAILY: i128 = MAX_REWARD_PER_DAY * 488 / 1000;
/// Daily emission with two fifths of the cap staked: `0.784 * max`.
pub const TWO_FIFTHS_OF_CAP_DAILY: i128 = MAX_REWARD_PER_DAY * 784 / 1000;

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let token_address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    (
        token::Client::new(env, &token_address),
        token::StellarAssetClient::new(env, &token_address),
    )
}

/// Deploys the engine and hands it the reward token's admin role so it is
/// the sole minter, the way the deploy scripts wire it up on-chain.
pub fn deploy_ink_maker_contract<'a>(
    env: &Env,
    admin: &Address,
    ink_token: &Address,
    deposit_token: &Address,
) -> InkMakerClient<'a> {
    let ink_maker = InkMakerClient::new(env, &env.register(InkMaker, ()));

    ink_maker.initialize(
        admin,
        ink_token,
        deposit_token,
        &MAX_REWARD_PER_DAY,
        &SOFT_CAP,
    );

    token::StellarAssetClient::new(env, ink_token).set_admin(&ink_maker.address);

    ink_maker
}
