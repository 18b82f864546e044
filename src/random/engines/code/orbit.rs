//! Two-word counter generator with a nonlinear output mix.

use crate::hash::mixers::GOLDEN_GAMMA;

use super::{RandomEngine, WORD_B_SEED};

/// Word A is a plain counter; word B is a golden-gamma counter that skips
/// one step each time A lands on zero, so the two words never advance in
/// lockstep over the full period.
pub struct Orbit {
    a: u64,
    b: u64,
}

impl Orbit {
    /// Additive increment for word A.
    pub(crate) const INC_A: u64 = 0xC6BC279692B5C323;

    /// Steps discarded after seeding, before the stream is handed out.
    pub const WARMUP_ROUNDS: usize = 10;

    pub fn new(seed: u64) -> Self {
        let mut g = Self::unmixed(seed);
        for _ in 0..Self::WARMUP_ROUNDS {
            g.next_u64();
        }
        g
    }

    /// Raw seeded state with no warm-up applied.
    pub(crate) fn unmixed(seed: u64) -> Self {
        Self {
            a: seed,
            b: WORD_B_SEED,
        }
    }
}

impl RandomEngine for Orbit {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.a = self.a.wrapping_add(Self::INC_A);
        let s = self.a;
        // B holds still on the step where A is exactly zero.
        let t = if s == 0 {
            self.b
        } else {
            self.b = self.b.wrapping_add(GOLDEN_GAMMA);
            self.b
        };
        let z = (s ^ (s >> 31)).wrapping_mul((t ^ (t >> 22)) | 1);
        z ^ (z >> 26)
    }
}
