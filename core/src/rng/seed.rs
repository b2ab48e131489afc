//! Seed construction contract
//!
//! A seed is exactly four 64-bit words. Slices of any other length are
//! rejected rather than padded or truncated, so a short seed can never
//! silently produce a stream the caller did not ask for.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of 64-bit words in a xoshiro256** seed
pub const SEED_WORDS: usize = 4;

/// Errors that can occur while building a seed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed must contain exactly {expected} words, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Seed word {index} is not a valid 64-bit hex value: '{value}'")]
    InvalidWord { index: usize, value: String },
}

/// Four seed words, consumed once to initialize a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed([u64; SEED_WORDS]);

impl Seed {
    pub const fn new(words: [u64; SEED_WORDS]) -> Self {
        Self(words)
    }

    pub const fn words(&self) -> [u64; SEED_WORDS] {
        self.0
    }

    /// Parse hex words, with or without a `0x` prefix
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Seed;
    ///
    /// let seed = Seed::from_hex_words(&["0x1", "ff", "0X10", "0"]).unwrap();
    /// assert_eq!(seed.words(), [1, 255, 16, 0]);
    /// ```
    pub fn from_hex_words<S: AsRef<str>>(words: &[S]) -> Result<Self, SeedError> {
        let parsed = words
            .iter()
            .enumerate()
            .map(|(index, word)| parse_hex_word(index, word.as_ref()))
            .collect::<Result<Vec<u64>, SeedError>>()?;

        Self::try_from(parsed.as_slice())
    }
}

fn parse_hex_word(index: usize, word: &str) -> Result<u64, SeedError> {
    let trimmed = word.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let invalid = || SeedError::InvalidWord {
        index,
        value: word.to_string(),
    };

    // from_str_radix accepts a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u64::from_str_radix(digits, 16).map_err(|_| invalid())
}

impl From<[u64; SEED_WORDS]> for Seed {
    fn from(words: [u64; SEED_WORDS]) -> Self {
        Self(words)
    }
}

impl TryFrom<&[u64]> for Seed {
    type Error = SeedError;

    fn try_from(words: &[u64]) -> Result<Self, Self::Error> {
        let words: [u64; SEED_WORDS] = words.try_into().map_err(|_| {
            tracing::debug!(words = words.len(), "rejecting seed of wrong length");
            SeedError::InvalidLength {
                expected: SEED_WORDS,
                actual: words.len(),
            }
        })?;
        Ok(Self(words))
    }
}
