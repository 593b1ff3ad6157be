#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod controller;
pub mod errors;
mod events;
mod ink_maker;
mod math;
mod msg;
mod storage;

pub use contract::*;

#[cfg(test)]
mod tests;
