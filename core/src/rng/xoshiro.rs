//! xoshiro256** random number generator
//!
//! A fast, deterministic PRNG with 256 bits of state and 64-bit output.
//! It is NOT cryptographically secure.
//!
//! # Algorithm
//!
//! Each step applies the `**` scrambler (`rotl(s1 * 5, 7) * 9`) to the
//! state *before* it is advanced, then runs the xoshiro xor/shift/rotate
//! linear transform over the four words. The `+` and `++` variants use
//! different scramblers and produce different streams.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers, bit for bit, on every
//! platform. Seeds become the state verbatim (no mixing step), so the
//! published reference vectors for a given seed apply directly.

use serde::{Deserialize, Serialize};

use super::derive;
use super::seed::{Seed, SeedError};

/// Deterministic random number generator using xoshiro256**
///
/// # Example
/// ```
/// use xoshiro_core_rs::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::new(1, 2, 3, 4);
/// let raw = rng.next_u64();
/// let unit = rng.next_f64(); // [0.0, 1.0)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xoshiro256StarStar {
    /// Internal state (4 x 64-bit words, s0..s3)
    state: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Create a new generator from four discrete seed words
    ///
    /// The words become the state verbatim. The all-zero seed is accepted;
    /// it is a fixed point of the transform and yields `0` forever.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256StarStar;
    ///
    /// let rng = Xoshiro256StarStar::new(
    ///     0x012de1babb3c4104,
    ///     0xa5a818b8fc5aa503,
    ///     0xb124ea2b701f4993,
    ///     0x18e0374933d8c782,
    /// );
    /// assert_eq!(rng.get_state()[0], 0x012de1babb3c4104);
    /// ```
    pub fn new(s0: u64, s1: u64, s2: u64, s3: u64) -> Self {
        Self::from_state([s0, s1, s2, s3])
    }

    /// Create a generator whose state is exactly `state`
    pub fn from_state(state: [u64; 4]) -> Self {
        Self { state }
    }

    /// Create a generator from a slice of seed words
    ///
    /// # Errors
    /// Returns [`SeedError::InvalidLength`] unless the slice holds exactly
    /// four words. Short seeds are never padded.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::{SeedError, Xoshiro256StarStar};
    ///
    /// assert!(Xoshiro256StarStar::from_seed_words(&[1, 2, 3, 4]).is_ok());
    /// assert_eq!(
    ///     Xoshiro256StarStar::from_seed_words(&[]),
    ///     Err(SeedError::InvalidLength { expected: 4, actual: 0 }),
    /// );
    /// ```
    pub fn from_seed_words(words: &[u64]) -> Result<Self, SeedError> {
        let seed = Seed::try_from(words)?;
        Ok(Self::from(seed))
    }

    /// Generate the next raw 64-bit draw
    ///
    /// Applies the `**` scrambler to the current state, then advances it.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256StarStar;
    ///
    /// let mut rng = Xoshiro256StarStar::new(
    ///     0x012de1babb3c4104,
    ///     0xa5a818b8fc5aa503,
    ///     0xb124ea2b701f4993,
    ///     0x18e0374933d8c782,
    /// );
    /// assert_eq!(rng.next_u64(), 0x462c422df780c48e);
    /// ```
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.state;

        // Scrambler reads the old s1
        let result = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);

        let t = *s1 << 17;

        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;

        *s2 ^= t;

        *s3 = s3.rotate_left(45);

        result
    }

    /// Get current state (for verification/replay)
    ///
    /// Does not advance the generator.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256StarStar;
    ///
    /// let mut rng = Xoshiro256StarStar::new(1, 2, 3, 4);
    /// rng.next_u64();
    ///
    /// // Later, can recreate the stream from this state
    /// let rng2 = Xoshiro256StarStar::from_state(rng.get_state());
    /// assert_eq!(rng, rng2);
    /// ```
    pub fn get_state(&self) -> [u64; 4] {
        self.state
    }

    /// High 16 bits of one draw
    #[inline]
    pub fn next_u16(&mut self) -> u16 {
        derive::next_uint16(self)
    }

    /// Top bit of one draw
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        derive::next_bool(self)
    }

    /// High 32 bits of one draw; the low half is discarded
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        derive::next_uint32(self)
    }

    /// Signed 32-bit value from the high half of one draw
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        derive::next_int32(self)
    }

    /// One draw reinterpreted as signed 64-bit
    #[inline]
    pub fn next_i64(&mut self) -> i64 {
        derive::next_int64(self)
    }

    /// Random f32 in `[0.0, 1.0)` with 24 bits of precision
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256StarStar;
    ///
    /// let mut rng = Xoshiro256StarStar::new(1, 2, 3, 4);
    /// let value = rng.next_f32();
    /// assert!((0.0..1.0).contains(&value));
    /// ```
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        derive::next_float32(self)
    }

    /// Random f64 in `[0.0, 1.0)` with 53 bits of precision
    ///
    /// Useful for sampling from probability distributions.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        derive::next_float64(self)
    }

    /// Fill `dest` with little-endian bytes of successive draws
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        derive::fill_bytes(self, dest)
    }

    /// Return `len` random bytes
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Xoshiro256StarStar;
    ///
    /// let mut a = Xoshiro256StarStar::new(1, 2, 3, 4);
    /// let mut b = a.clone();
    ///
    /// let bytes = a.next_bytes(5);
    /// assert_eq!(bytes[..], b.next_u64().to_le_bytes()[..5]);
    /// ```
    pub fn next_bytes(&mut self, len: usize) -> Vec<u8> {
        derive::next_bytes(self, len)
    }
}

impl From<[u64; 4]> for Xoshiro256StarStar {
    fn from(state: [u64; 4]) -> Self {
        Self::from_state(state)
    }
}

impl From<Seed> for Xoshiro256StarStar {
    fn from(seed: Seed) -> Self {
        Self::from_state(seed.words())
    }
}
