//! # Bench-Kit
//!
//! Support utilities for repeatable micro-benchmarks: a family of
//! seedable 64-bit PRNG engines, stateless integer mixers, pluggable
//! hash schemes for keyed containers, and the timing plumbing to compare
//! them under one harness.
//!
//! Everything that produces data is seeded explicitly. Same seed, same
//! inputs, same reference outputs, on every platform; only the
//! measurement schedule is allowed to vary between runs.

pub mod hash;
pub mod random;
pub mod registry;
pub mod utils;

/// Re-export tui from utils for convenient access
pub use utils::tui;

/// Re-export the whole-registry entry point
pub use utils::runner::run_all_randomized;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::hash::int_hasher::{HashScheme, SchemeBuildHasher};
    pub use crate::hash::mixers::MixerKind;
    pub use crate::random::engines::{Engine, EngineKind, RandomEngine};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

/// Time a block, yielding `(measurement, block value)`.
///
/// The measurement source (cycle counter or monotonic clock) follows the
/// `cpu_cycles`/`use_time` features; see [`utils::bench`].
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $body;
        ($crate::utils::bench::elapsed(start), result)
    }};
}
