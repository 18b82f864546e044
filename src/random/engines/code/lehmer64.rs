//! 128-bit multiplicative congruential generator (Lehmer style).

use crate::hash::mixers::split_mix64_at;

use super::RandomEngine;

/// MCG multiplier from Lemire's 128-bit spectral-test tables.
const MCG_MUL: u64 = 0xDA942042E4DD58B5;

/// One 128-bit state word; the output is its high half. An MCG must never
/// hold state zero, and the SplitMix64 expansion below cannot produce it:
/// the stream is a bijection, so at most one of the two words is zero.
pub struct Lehmer64 {
    state: u128,
}

impl Lehmer64 {
    /// Expand the seed into 128 bits via two consecutive SplitMix64
    /// points, so near-identical seeds start on distant states.
    pub fn new(seed: u64) -> Self {
        let hi = split_mix64_at(seed);
        let lo = split_mix64_at(seed.wrapping_add(1));
        Self {
            state: ((hi as u128) << 64) | (lo as u128),
        }
    }
}

impl RandomEngine for Lehmer64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MCG_MUL as u128);
        (self.state >> 64) as u64
    }
}
