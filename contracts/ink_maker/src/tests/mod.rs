mod emission;
pub mod setup;
