use soroban_sdk::{contracttype, Vec};

use crate::storage::{Config, StakeEntry, UserAccount};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserResponse {
    pub account: UserAccount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntriesResponse {
    pub entries: Vec<StakeEntry>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeResponse {
    /// Id of the entry opened by this call; `None` for a pure claim.
    pub entry_id: Option<u64>,
    pub minted_reward: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawResponse {
    pub principal: i128,
    pub minted_reward: i128,
}
