//! # PRNG engines
//!
//! Seedable 64-bit generators compared for per-call throughput. Every
//! engine satisfies the same contract: construct from a `u64` seed (the
//! constructor performs any warm-up), then each `next_u64` call advances
//! the state exactly one step. Same kind + same seed = same sequence,
//! across platforms.

pub mod bench;
pub mod code;
#[cfg(test)]
pub mod test;

pub use code::{
    CounterMix, Engine, EngineKind, Lehmer64, Orbit, RandomEngine, RomuDuoJr, Sfc4, WyRand,
};

use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

const REFERENCE_SEED: u64 = 42;

/// First three outputs at seed 42, one row per `EngineKind::ALL` entry.
const REFERENCE_VECTORS: [[u64; 3]; 6] = [
    [0xb7dbd4cc19cc230a, 0x5ea3c04a53482a30, 0xf041f89a78df8d0a],
    [0x342e687985c0c786, 0x84184569ff4995c3, 0x99029dfdee06bfca],
    [0x0cd578853b13e86a, 0x9547c26716c2fcc3, 0x319fca45adf652cc],
    [0x8523e80b9315250f, 0x6eed2e597dc42594, 0x69a1dd05569574be],
    [0xbdd732262feb6e95, 0xba69ec90eb4fef88, 0xfb452912299a5453],
    [0xae4a7cbfdda9b434, 0xe9cc09d33d38d9d2, 0xcb5756512b93433a],
];

pub struct EnginesRunner;

impl AlgorithmRunner for EnginesRunner {
    fn name(&self) -> &'static str {
        "prng_engines"
    }

    fn description(&self) -> &'static str {
        "Seedable 64-bit generators, per-call throughput"
    }

    fn category(&self) -> &'static str {
        "random"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        EngineKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        // A step is a handful of cycles; tiny batches measure only noise.
        if size < 1024 {
            return Vec::new();
        }
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        for (kind, expected) in EngineKind::ALL.iter().zip(REFERENCE_VECTORS) {
            let mut engine = Engine::new(*kind, REFERENCE_SEED);
            for (step, &want) in expected.iter().enumerate() {
                let got = engine.next_u64();
                if got != want {
                    return Err(format!(
                        "{}: output {} was {:#018x}, reference is {:#018x}",
                        kind.name(),
                        step,
                        got,
                        want
                    ));
                }
            }
        }
        Ok(())
    }
}
