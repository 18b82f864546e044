//! Counter-driven mixer stream.

use crate::hash::mixers::MixerKind;

use super::RandomEngine;

/// A mixer applied to an incrementing index. There is no hidden state
/// beyond the index itself, so `value_at` can address any position of the
/// stream directly and parallel consumers never contend.
pub struct CounterMix {
    index: u64,
    mixer: MixerKind,
}

impl CounterMix {
    /// SplitMix64-backed stream starting at `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_mixer(MixerKind::SplitMix64, seed)
    }

    /// Stream over an arbitrary mixer.
    pub fn with_mixer(mixer: MixerKind, seed: u64) -> Self {
        Self { index: seed, mixer }
    }

    /// The stream value at `index`, no stream object required.
    #[inline]
    pub fn value_at(mixer: MixerKind, index: u64) -> u64 {
        mixer.mix(index)
    }
}

impl RandomEngine for CounterMix {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let out = Self::value_at(self.mixer, self.index);
        self.index = self.index.wrapping_add(1);
        out
    }
}
