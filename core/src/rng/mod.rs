//! Deterministic random number generation
//!
//! Uses the xoshiro256** algorithm with fixed, bit-exact rules for deriving
//! integers, floats and bytes from the raw 64-bit stream.
//! CRITICAL: These mappings are a compatibility contract. Changing any of
//! them changes every generated value for every seed.

pub mod derive;
mod seed;
mod xoshiro;

pub use derive::{DOUBLE_MULTIPLIER, FLOAT_MULTIPLIER};
pub use seed::{Seed, SeedError, SEED_WORDS};
pub use xoshiro::Xoshiro256StarStar;
