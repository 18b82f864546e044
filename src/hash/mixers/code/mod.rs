//! Stateless 64-bit integer mixers.
//!
//! Every function here is a pure `u64 -> u64` map. They back the integer
//! hash schemes, the counter-driven generator, and seed expansion.

mod evensen;
mod fib_fold;
mod mur3;
mod rot_mul;
mod split_mix;

pub use evensen::rrxmrrxmsx_0;
pub use fib_fold::{fib_fold, fib_fold_narrow, fib_fold_wide};
pub use mur3::mur3;
pub use rot_mul::rot_mul;
pub use split_mix::{mix64, split_mix64_at, GOLDEN_GAMMA};

use crate::utils::VariantInfo;

/// Runtime-selectable mixer identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixerKind {
    FibFold,
    FibFoldNarrow,
    RotMul,
    Rrxmrrxmsx,
    Mur3,
    SplitMix64,
}

impl MixerKind {
    /// Every mixer, in display order.
    pub const ALL: [MixerKind; 6] = [
        MixerKind::FibFold,
        MixerKind::FibFoldNarrow,
        MixerKind::RotMul,
        MixerKind::Rrxmrrxmsx,
        MixerKind::Mur3,
        MixerKind::SplitMix64,
    ];

    /// Apply the selected mixer to one value.
    #[inline]
    pub fn mix(self, value: u64) -> u64 {
        (self.function())(value)
    }

    /// The mixer as a plain function pointer.
    pub fn function(self) -> fn(u64) -> u64 {
        match self {
            MixerKind::FibFold => fib_fold,
            MixerKind::FibFoldNarrow => fib_fold_narrow,
            MixerKind::RotMul => rot_mul,
            MixerKind::Rrxmrrxmsx => rrxmrrxmsx_0,
            MixerKind::Mur3 => mur3,
            MixerKind::SplitMix64 => split_mix64_at,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MixerKind::FibFold => "fib_fold",
            MixerKind::FibFoldNarrow => "fib_fold_narrow",
            MixerKind::RotMul => "rot_mul",
            MixerKind::Rrxmrrxmsx => "rrxmrrxmsx_0",
            MixerKind::Mur3 => "mur3",
            MixerKind::SplitMix64 => "split_mix64",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MixerKind::FibFold => "golden-ratio fold of the 128-bit product",
            MixerKind::FibFoldNarrow => "64-bit fold, the 32-bit-target fallback",
            MixerKind::RotMul => "two multiplies over the key and its rotation",
            MixerKind::Rrxmrrxmsx => "Evensen rrxmrrxmsx_0, strongest diffusion",
            MixerKind::Mur3 => "MurmurHash3 finalizer",
            MixerKind::SplitMix64 => "SplitMix64 stream point",
        }
    }
}

/// All mixers packaged for the benchmark harness.
pub fn available_variants() -> Vec<VariantInfo<fn(u64) -> u64>> {
    MixerKind::ALL
        .iter()
        .map(|&kind| VariantInfo {
            name: kind.name(),
            description: kind.description(),
            function: kind.function(),
        })
        .collect()
}
