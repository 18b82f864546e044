//! wyrand: the PRNG half of the wyhash family.

use crate::hash::wyhash::wyrand_step;

use super::RandomEngine;

/// One additive secret step and one mum per value. The additive update
/// means the seed is used as-is; decorrelation comes from the mix, not
/// from warm-up.
pub struct WyRand {
    state: u64,
}

impl WyRand {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomEngine for WyRand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        wyrand_step(&mut self.state)
    }
}
