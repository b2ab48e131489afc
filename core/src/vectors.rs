//! Test vector generation
//!
//! Produces, for each configured seed, a fixed-length sequence of every
//! derived value kind. Each kind is drawn from its own freshly seeded
//! generator, so every sequence starts at the seed and can be checked
//! independently of the others.
//!
//! Rendering (hex, decimal text, JSON files) is left to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{Seed, Xoshiro256StarStar};

/// Seed used by the Apache Commons RNG / Blackman–Vigna reference tests
pub const APACHE_REFERENCE_SEED: Seed = Seed::new([
    0x012de1babb3c4104,
    0xa5a818b8fc5aa503,
    0xb124ea2b701f4993,
    0x18e0374933d8c782,
]);

/// All-zero seed (degenerate: yields zero forever)
pub const ZERO_SEED: Seed = Seed::new([0; 4]);

/// Scenario seed with a pinned first draw
pub const SCENARIO_SEED: Seed = Seed::new([
    0x1234567890abcdef,
    0xfedcba0987654321,
    0xabcdef1234567890,
    0x0987654321fedcba,
]);

/// Default number of values per kind
pub const DEFAULT_COUNT: usize = 30;

/// Errors raised while loading or validating a vector configuration
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("Invalid vector config: {0}")]
    InvalidConfig(String),

    #[error("Config serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{kind} #{index} mismatch: expected {expected}, generator produced {actual}")]
    Mismatch {
        kind: &'static str,
        index: usize,
        expected: String,
        actual: String,
    },
}

/// Which seeds to expand and how many values per kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorConfig {
    pub seeds: Vec<Seed>,

    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            seeds: vec![APACHE_REFERENCE_SEED, ZERO_SEED, SCENARIO_SEED],
            count: DEFAULT_COUNT,
        }
    }
}

impl VectorConfig {
    /// Parse and validate a JSON config
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::VectorConfig;
    ///
    /// let config = VectorConfig::from_json(r#"{"seeds": [[1, 2, 3, 4]], "count": 5}"#).unwrap();
    /// assert_eq!(config.count, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, VectorError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VectorError> {
        if self.seeds.is_empty() {
            return Err(VectorError::InvalidConfig(
                "at least one seed is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Expand every configured seed into a [`VectorSet`]
    pub fn generate(&self) -> Vec<VectorSet> {
        self.seeds
            .iter()
            .map(|seed| VectorSet::generate(*seed, self.count))
            .collect()
    }
}

/// Derived-value sequences for one seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSet {
    pub seed: Seed,

    /// Generator state right after construction
    pub state: [u64; 4],

    pub integers: Vec<i32>,
    pub longs: Vec<i64>,
    pub floats: Vec<f32>,
    pub doubles: Vec<f64>,
    pub bytes: Vec<u8>,
}

impl VectorSet {
    /// Draw `count` values of each kind from fresh generators seeded with `seed`
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::{VectorSet, APACHE_REFERENCE_SEED};
    ///
    /// let set = VectorSet::generate(APACHE_REFERENCE_SEED, 3);
    /// assert_eq!(set.longs[0] as u64, 0x462c422df780c48e);
    /// assert_eq!(set.bytes.len(), 3);
    /// ```
    pub fn generate(seed: Seed, count: usize) -> Self {
        tracing::debug!(seed = ?seed.words(), count, "generating vector set");

        let fresh = || Xoshiro256StarStar::from(seed);

        let mut rng = fresh();
        let integers = (0..count).map(|_| rng.next_i32()).collect();

        let mut rng = fresh();
        let longs = (0..count).map(|_| rng.next_i64()).collect();

        let mut rng = fresh();
        let floats = (0..count).map(|_| rng.next_f32()).collect();

        let mut rng = fresh();
        let doubles = (0..count).map(|_| rng.next_f64()).collect();

        let bytes = fresh().next_bytes(count);

        Self {
            seed,
            state: fresh().get_state(),
            integers,
            longs,
            floats,
            doubles,
            bytes,
        }
    }

    /// Replay every sequence against fresh generators seeded with `self.seed`
    ///
    /// Sequences may have different lengths (fixtures loaded from text
    /// need not be uniform); each is checked over its own length.
    ///
    /// # Errors
    /// Returns [`VectorError::Mismatch`] naming the first differing value.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::{VectorSet, SCENARIO_SEED};
    ///
    /// let mut set = VectorSet::generate(SCENARIO_SEED, 5);
    /// assert!(set.verify().is_ok());
    ///
    /// set.doubles[2] = 0.5;
    /// assert!(set.verify().is_err());
    /// ```
    pub fn verify(&self) -> Result<(), VectorError> {
        let fresh = || Xoshiro256StarStar::from(self.seed);

        let mut rng = fresh();
        check("Integers", &self.integers, || rng.next_i32(), |v| {
            format!("0x{:08x}", v)
        })?;

        let mut rng = fresh();
        check("Longs", &self.longs, || rng.next_i64(), |v| {
            format!("0x{:016x}", v)
        })?;

        let mut rng = fresh();
        check("Floats", &self.floats, || rng.next_f32(), |v| v.to_string())?;

        let mut rng = fresh();
        check("Doubles", &self.doubles, || rng.next_f64(), |v| v.to_string())?;

        let bytes = fresh().next_bytes(self.bytes.len());
        let mut replay = bytes.iter().copied();
        check(
            "Bytes",
            &self.bytes,
            || replay.next().unwrap_or_default(),
            |v| format!("0x{:02x}", v),
        )?;

        tracing::debug!(seed = ?self.seed.words(), "vector set verified");
        Ok(())
    }
}

fn check<T: Copy + PartialEq>(
    kind: &'static str,
    expected: &[T],
    mut next: impl FnMut() -> T,
    show: impl Fn(T) -> String,
) -> Result<(), VectorError> {
    for (index, &want) in expected.iter().enumerate() {
        let got = next();
        if got != want {
            return Err(VectorError::Mismatch {
                kind,
                index,
                expected: show(want),
                actual: show(got),
            });
        }
    }
    Ok(())
}
