//! Stream fingerprints
//!
//! A SHA-256 digest over the little-endian bytes of the first N raw draws.
//! Pinning one digest covers an arbitrarily long prefix of the stream,
//! which is how long-sequence golden fixtures are stored.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::rng::{Seed, Xoshiro256StarStar};
use crate::vectors::VectorError;

/// Hash the next `draws` raw draws of `rng`, advancing it
///
/// Returns the lowercase hex digest.
pub fn stream_fingerprint(rng: &mut Xoshiro256StarStar, draws: usize) -> String {
    let mut hasher = Sha256::new();
    for _ in 0..draws {
        hasher.update(rng.next_u64().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Fingerprint of the first `draws` draws of a fresh generator
///
/// # Example
/// ```
/// use xoshiro_core_rs::{seed_fingerprint, ZERO_SEED};
///
/// let a = seed_fingerprint(ZERO_SEED, 8);
/// assert_eq!(a, seed_fingerprint(ZERO_SEED, 8));
/// assert_eq!(a.len(), 64);
/// ```
pub fn seed_fingerprint(seed: Seed, draws: usize) -> String {
    tracing::trace!(seed = ?seed.words(), draws, "fingerprinting stream");
    stream_fingerprint(&mut Xoshiro256StarStar::from(seed), draws)
}

/// SHA-256 of the JSON form of any serializable vector data
///
/// Used to compare whole rendered vector sets across runs.
pub fn compute_vector_hash<T: Serialize>(value: &T) -> Result<String, VectorError> {
    let json = serde_json::to_string(value)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::{VectorSet, APACHE_REFERENCE_SEED, SCENARIO_SEED};

    #[test]
    fn test_zero_draws_is_empty_digest() {
        assert_eq!(
            seed_fingerprint(APACHE_REFERENCE_SEED, 0),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_stream_fingerprint_advances_generator() {
        let mut rng = Xoshiro256StarStar::from(APACHE_REFERENCE_SEED);
        stream_fingerprint(&mut rng, 10);
        assert_eq!(
            rng.get_state(),
            [
                0x45dbb89099f4882c,
                0x82fb268729e7c5fb,
                0x1227e01afb75507d,
                0xc86b9474fe3096a6,
            ]
        );
    }

    #[test]
    fn test_vector_hash_detects_changes() {
        let a = VectorSet::generate(APACHE_REFERENCE_SEED, 4);
        let b = VectorSet::generate(SCENARIO_SEED, 4);

        let hash_a = compute_vector_hash(&a).unwrap();
        assert_eq!(hash_a, compute_vector_hash(&a.clone()).unwrap());
        assert_ne!(hash_a, compute_vector_hash(&b).unwrap());
    }
}
