pub mod emission;
pub mod lockup;

/// 18-decimal fixed point shared by the emission curve and the
/// reward-per-share accumulator.
pub const PRECISION: u128 = 1_000_000_000_000_000_000;
