//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. Randomness exists ONLY for scenario construction; the engine
//! itself never draws a random number.

mod xorshift;

pub use xorshift::RngManager;
