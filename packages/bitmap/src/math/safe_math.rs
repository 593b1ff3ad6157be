use soroban_sdk::{log, Env};

use crate::error::{BitmapResult, ErrorCode};
use crate::math::bn::U256;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> BitmapResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> BitmapResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> BitmapResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> BitmapResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> BitmapResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> BitmapResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> BitmapResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> BitmapResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(U256);
checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(i128);
checked_impl!(i64);
checked_impl!(i32);

#[cfg(test)]
mod test {
    use crate::error::ErrorCode;
    use crate::math::bn::U256;
    use crate::math::safe_math::SafeMath;
    use soroban_sdk::Env;

    #[test]
    fn safe_add() {
        let env = Env::default();
        assert_eq!((1_u128).safe_add(1, &env).unwrap(), 2);
        assert_eq!(
            (1_u128).safe_add(u128::MAX, &env),
            Err(ErrorCode::MathError)
        );
    }

    #[test]
    fn safe_sub() {
        let env = Env::default();
        assert_eq!((1_u128).safe_sub(1, &env).unwrap(), 0);
        assert_eq!((0_u128).safe_sub(1, &env), Err(ErrorCode::MathError));
    }

    #[test]
    fn safe_mul() {
        let env = Env::default();
        assert_eq!((8_u128).safe_mul(80, &env).unwrap(), 640);
        assert_eq!((1_u128).safe_mul(1, &env).unwrap(), 1);
        assert_eq!(
            (2_u128).safe_mul(u128::MAX, &env),
            Err(ErrorCode::MathError)
        );
    }

    #[test]
    fn safe_div() {
        let env = Env::default();
        assert_eq!((155_u128).safe_div(8, &env).unwrap(), 19);
        assert_eq!((160_u128).safe_div(8, &env).unwrap(), 20);

        assert_eq!((1_u128).safe_div(100, &env).unwrap(), 0);
        assert_eq!((1_u128).safe_div(0, &env), Err(ErrorCode::MathError));
    }

    #[test]
    fn safe_math_u256() {
        let env = Env::default();
        let max = U256::MAX;
        assert_eq!(
            U256::from(2u32).safe_mul(max, &env),
            Err(ErrorCode::MathError)
        );
        assert_eq!(
            U256::from(6u32)
                .safe_mul(U256::from(7u32), &env)
                .unwrap()
                .safe_div(U256::from(2u32), &env)
                .unwrap(),
            U256::from(21u32)
        );
    }
}
