//! Measurement and execution plumbing shared by every case.

pub mod bench;
pub mod clock;
pub mod cpu_affinity;
pub mod cpu_info;
pub mod runner;
pub mod strings;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export the names cases reach for most.
pub use bench::{
    derive_seed, elapsed, entropy_seed, now, shuffle, shuffle_with_rng, time_seed, Measurement,
};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_variants, TimingConfig, Variant, VariantResult};

/// One benchmarkable implementation of a case, generic over the function
/// signature the case needs.
pub struct VariantInfo<F> {
    pub name: &'static str,
    pub description: &'static str,
    pub function: F,
}
