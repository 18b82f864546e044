//! SplitMix64 finalizer and stateless stream access.
//!
//! Sebastiano Vigna's splitmix64. The bare finalizer doubles as the
//! default integer hash scheme; the gamma-offset form is the stream used
//! for seeding and counter-driven generation.

/// 2^64 / phi. SplitMix64 stream increment ("gamma"), golden-ratio
/// multiplier for the Fibonacci fold, and the fixed key of the wyhash
/// integer scheme.
pub const GOLDEN_GAMMA: u64 = 0x9E3779B97F4A7C15;

/// Bare SplitMix64 finalizer (no gamma add).
#[inline]
pub fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Value of the SplitMix64 stream at `index`. Any position is addressable
/// directly, so parallel consumers need no shared state.
#[inline]
pub fn split_mix64_at(index: u64) -> u64 {
    mix64(index.wrapping_add(GOLDEN_GAMMA))
}
