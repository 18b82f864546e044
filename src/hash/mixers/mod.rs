//! # Bit mixers
//!
//! Stateless `u64 -> u64` diffusion functions: how thoroughly, and at
//! what cost, does each one spread single-bit input changes over the
//! output word. The strong ones back hash schemes; the cheap folds trade
//! diffusion for latency.

pub mod bench;
pub mod code;
#[cfg(test)]
pub mod test;

pub use code::{
    available_variants, fib_fold, fib_fold_narrow, fib_fold_wide, mix64, mur3, rot_mul,
    rrxmrrxmsx_0, split_mix64_at, MixerKind, GOLDEN_GAMMA,
};

use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Expected `mix(1)` and `mix(42)`, one row per `MixerKind::ALL` entry.
/// The fib_fold row follows the platform dispatch.
const REFERENCE_PAIRS: [(u64, u64); 6] = [
    if cfg!(target_pointer_width = "64") {
        (0x9e3779b97f4a7c15, 0xf519f86ee2385b8b)
    } else {
        (0xca4bcaa8290fc0cc, 0x306f3f75bc95a187)
    },
    (0xca4bcaa8290fc0cc, 0x306f3f75bc95a187),
    (0xc0e48df9963ee407, 0xa57f4af2a6516926),
    (0x0dadbfeeb7d64133, 0x7e5408d0aa979155),
    (0xb456bcfc34c2cb2c, 0x810879608e4259cc),
    (0x910a2dec89025cc1, 0xbdd732262feb6e95),
];

pub struct MixersRunner;

impl AlgorithmRunner for MixersRunner {
    fn name(&self) -> &'static str {
        "bit_mixers"
    }

    fn description(&self) -> &'static str {
        "Stateless integer mixers over a counter stream"
    }

    fn category(&self) -> &'static str {
        "hash"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        MixerKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        // A mixer is a few multiplies; tiny batches measure only noise.
        if size < 1024 {
            return Vec::new();
        }
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        for (kind, (at_one, at_42)) in MixerKind::ALL.iter().zip(REFERENCE_PAIRS) {
            for (input, want) in [(1u64, at_one), (42u64, at_42)] {
                let got = kind.mix(input);
                if got != want {
                    return Err(format!(
                        "{}({}) was {:#018x}, reference is {:#018x}",
                        kind.name(),
                        input,
                        got,
                        want
                    ));
                }
            }
        }
        Ok(())
    }
}
