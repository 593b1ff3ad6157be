use soroban_sdk::{log, Env};

use crate::error::{BitmapResult, ErrorCode};

pub trait Cast: Sized {
    #[track_caller]
    #[inline(always)]
    fn cast<T: TryFrom<Self>>(self, env: &Env) -> BitmapResult<T> {
        match self.try_into() {
            Ok(result) => Ok(result),
            Err(_) => {
                log!(env, "Casting error thrown at {}:{}", file!(), line!());
                Err(ErrorCode::CastingFailure)
            }
        }
    }
}

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
impl Cast for i64 {}
impl Cast for i32 {}

#[cfg(test)]
mod test {
    use super::Cast;
    use crate::error::ErrorCode;
    use soroban_sdk::Env;

    #[test]
    fn cast_widening() {
        let env = Env::default();
        assert_eq!((42_u64).cast::<u128>(&env), Ok(42_u128));
        assert_eq!((42_u128).cast::<i128>(&env), Ok(42_i128));
    }

    #[test]
    fn cast_narrowing_failure() {
        let env = Env::default();
        assert_eq!(u128::MAX.cast::<u64>(&env), Err(ErrorCode::CastingFailure));
        assert_eq!((-1_i128).cast::<u128>(&env), Err(ErrorCode::CastingFailure));
    }
}
