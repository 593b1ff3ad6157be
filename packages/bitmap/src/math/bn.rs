//! Big number types

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use uint::construct_uint;

use crate::error::{BitmapResult, ErrorCode};

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

impl U256 {
    /// Convert a U256 to a u64 if it fits.
    pub fn to_u64(self) -> Option<u64> {
        self.try_to_u64().ok()
    }

    pub fn try_to_u64(self) -> BitmapResult<u64> {
        self.try_into().map_err(|_| ErrorCode::BnConversionError)
    }

    /// Convert a U256 to a u128 if it fits.
    pub fn to_u128(self) -> Option<u128> {
        self.try_to_u128().ok()
    }

    pub fn try_to_u128(self) -> BitmapResult<u128> {
        self.try_into().map_err(|_| ErrorCode::BnConversionError)
    }
}
