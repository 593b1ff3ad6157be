use soroban_sdk::contracterror;

pub type BitmapResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 100,
    BnConversionError = 101,
    CastingFailure = 102,
    InsufficientFunds = 103,
}
