//! Xoshiro Core - deterministic xoshiro256** generator
//!
//! Bit-exact xoshiro256** with canonical rules for deriving integers,
//! floats and bytes from the raw 64-bit stream.
//!
//! # Architecture
//!
//! - **rng**: Core generator, seed contract and numeric derivers
//! - **vectors**: Fixed-length test vector sets per seed
//! - **fingerprint**: SHA-256 digests of raw-draw streams
//!
//! # Critical Invariants
//!
//! 1. Seeds become the state verbatim; seeds must be exactly 4 words
//! 2. All arithmetic is wrapping u64; nothing here can fail or panic
//! 3. Every derived value consumes a fixed number of raw draws
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod fingerprint;
pub mod rng;
pub mod vectors;

// Re-exports for convenience
pub use fingerprint::{compute_vector_hash, seed_fingerprint, stream_fingerprint};
pub use rng::{
    Seed, SeedError, Xoshiro256StarStar, DOUBLE_MULTIPLIER, FLOAT_MULTIPLIER, SEED_WORDS,
};
pub use vectors::{
    VectorConfig, VectorError, VectorSet, APACHE_REFERENCE_SEED, DEFAULT_COUNT, SCENARIO_SEED,
    ZERO_SEED,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoshiro_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyXoshiro256>()?;
    Ok(())
}
