//! Deterministic pseudo-random generation
//!
//! Uses a Lehmer linear-congruential generator (the "minimal standard" LCG).
//! CRITICAL: every random-looking choice in the crate MUST go through this
//! module. Platform or cryptographic RNGs would break the same-day,
//! same-output contract.

mod lcg;

pub use lcg::{shuffle, Lcg};
