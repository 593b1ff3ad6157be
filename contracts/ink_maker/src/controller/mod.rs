pub mod reward;
pub mod stake;
