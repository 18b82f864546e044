//! Mark Overton's RomuDuoJr. <https://romu-random.org>

use super::{RandomEngine, WORD_B_SEED};

/// Multiplier from the RomuDuoJr reference parameters.
const ROMU_MUL: u64 = 15241094284759029579;

/// Two words, one multiply and one rotate per step. The output is the
/// pre-update value of X, so the result is ready before the state work
/// finishes retiring.
pub struct RomuDuoJr {
    x: u64,
    y: u64,
}

impl RomuDuoJr {
    /// Steps discarded after seeding.
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
            x: seed,
            y: WORD_B_SEED,
        }
    }
}

impl RandomEngine for RomuDuoJr {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let out = self.x;
        self.x = ROMU_MUL.wrapping_mul(self.y);
        self.y = self.y.wrapping_sub(out).rotate_left(27);
        out
    }
}
