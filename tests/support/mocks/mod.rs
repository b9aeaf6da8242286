// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod directory;
pub mod security;
pub mod time;

pub use directory::{FailingDirectory, RacyDirectory};
pub use security::{FailingPasswordHasher, StrictPasswordHasher};
pub use time::{FixedClock, fixed_now};
