use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Errors {
    AlreadyInitialized = 1,
    #[doc = "Emission constants must be positive"]
    InvalidConfig = 2,
    #[doc = "Staked amount must be non-negative"]
    InvalidAmount = 3,
    #[doc = "Lockup exceeds the seven month maximum"]
    InvalidLockup = 4,
    EntryNotFound = 5,
    #[doc = "Withdraw called by someone other than the entry owner"]
    NotOwner = 6,
    #[doc = "Withdraw called twice on the same entry"]
    AlreadyWithdrawn = 7,
}
