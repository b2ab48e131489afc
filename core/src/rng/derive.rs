//! Numeric derivers
//!
//! Fixed mappings from raw 64-bit draws to typed values. Every function
//! here is total and consumes a known number of draws:
//!
//! | Deriver | Draws | Mapping |
//! |---|---|---|
//! | [`next_int32`] | 1 | high 32 bits, low 32 bits discarded |
//! | [`next_int64`] | 1 | the draw itself |
//! | [`next_float32`] | 1 | top 24 bits of the 32-bit value × 2⁻²⁴ |
//! | [`next_float64`] | 1 | top 53 bits × 2⁻⁵³ |
//! | [`next_bytes`] | ⌈n/8⌉ | little-endian bytes of each draw |
//! | [`next_uint16`] | 1 | high 16 bits |
//! | [`next_bool`] | 1 | top bit |
//!
//! The unused low bits of a draw are never cached for a later call: each
//! 16- or 32-bit value costs one full draw. Fixed-length sequences are
//! plain iterators, e.g. `(0..n).map(|_| rng.next_f64()).collect()`.

use super::Xoshiro256StarStar;

/// Exact 2⁻²⁴ (`0x1.0p-24f`), bit pattern `0x3380_0000`
pub const FLOAT_MULTIPLIER: f32 = 1.0 / (1u32 << 24) as f32;

/// Exact 2⁻⁵³ (`0x1.0p-53`), bit pattern `0x3CA0_0000_0000_0000`
pub const DOUBLE_MULTIPLIER: f64 = 1.0 / (1u64 << 53) as f64;

/// High 16 bits of one draw
#[inline]
pub fn next_uint16(rng: &mut Xoshiro256StarStar) -> u16 {
    (rng.next_u64() >> 48) as u16
}

/// Top bit of one draw
#[inline]
pub fn next_bool(rng: &mut Xoshiro256StarStar) -> bool {
    rng.next_u64() >> 63 != 0
}

/// High 32 bits of one draw
#[inline]
pub fn next_uint32(rng: &mut Xoshiro256StarStar) -> u32 {
    (rng.next_u64() >> 32) as u32
}

/// High 32 bits of one draw, reinterpreted as signed
#[inline]
pub fn next_int32(rng: &mut Xoshiro256StarStar) -> i32 {
    next_uint32(rng) as i32
}

/// One draw, reinterpreted as signed
#[inline]
pub fn next_int64(rng: &mut Xoshiro256StarStar) -> i64 {
    rng.next_u64() as i64
}

/// Uniform f32 in `[0.0, 1.0)`, always `k * 2^-24` for `k < 2^24`
#[inline]
pub fn next_float32(rng: &mut Xoshiro256StarStar) -> f32 {
    (next_uint32(rng) >> 8) as f32 * FLOAT_MULTIPLIER
}

/// Uniform f64 in `[0.0, 1.0)`, always `k * 2^-53` for `k < 2^53`
#[inline]
pub fn next_float64(rng: &mut Xoshiro256StarStar) -> f64 {
    (rng.next_u64() >> 11) as f64 * DOUBLE_MULTIPLIER
}

/// Fill `dest` with successive draws in little-endian byte order
///
/// A trailing partial chunk takes the low-order bytes of one more draw.
/// An empty slice consumes nothing.
pub fn fill_bytes(rng: &mut Xoshiro256StarStar, dest: &mut [u8]) {
    let mut chunks = dest.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
    }

    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let bytes = rng.next_u64().to_le_bytes();
        tail.copy_from_slice(&bytes[..tail.len()]);
    }
}

/// Allocate and fill `len` random bytes
pub fn next_bytes(rng: &mut Xoshiro256StarStar, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    fill_bytes(rng, &mut bytes);
    bytes
}
