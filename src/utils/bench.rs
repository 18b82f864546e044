//! Shared benchmark utilities: the measurement reading, seeds, and
//! shuffling.
//!
//! With the default `cpu_cycles` feature a measurement is a raw cycle
//! count; `--features use_time` (or `--no-default-features`) switches to
//! the monotonic clock. Everything downstream handles both through the
//! `Measurement` alias.

use std::time::Duration;

use crate::hash::mixers::{split_mix64_at, GOLDEN_GAMMA};
use crate::random::engines::{CounterMix, RandomEngine};

// ============================================================================
// Measurement abstraction: cycles or time, fixed by feature flags
// ============================================================================
//
// Cycles when: cpu_cycles enabled AND use_time disabled.
// Time when:   use_time enabled OR cpu_cycles disabled.

/// Measurement value type: raw cycles (`u64`) or `Duration`.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Anchor for an elapsed reading (cycle count or monotonic nanoseconds).
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> u64 {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> u64 {
    crate::utils::clock::monotonic_nanos()
}

/// Measurement elapsed since an anchor returned by [`now`].
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: u64) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: u64) -> Measurement {
    Duration::from_nanos(crate::utils::clock::monotonic_nanos().saturating_sub(start))
}

/// Measurement as a display count (cycles stay raw, time becomes ns).
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Unit label matching [`to_nanos`].
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(target_arch = "x86_64")]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Render a stored result figure with its unit. Results are stored as
/// `Duration` either way; in cycles mode the "nanoseconds" are raw
/// counts.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(m: Duration) -> String {
    format!("{} {}", m.as_nanos(), unit_name())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(m: Duration) -> String {
    format!("{:.2?}", m)
}

// ============================================================================
// Seeds and shuffling
// ============================================================================

/// Fisher-Yates shuffle over a fresh SplitMix64 stream.
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = CounterMix::new(seed);
    shuffle_with_rng(slice, &mut rng);
}

/// Shuffle with a caller-owned engine; sequential shuffles keep consuming
/// the same stream.
pub fn shuffle_with_rng<T, R: RandomEngine>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Wall-clock seed, for run-to-run schedule variation.
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// OS-entropy seed, for runs that should not repeat.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}

/// Decorrelated per-lane seed: a SplitMix64 point of the base seed offset
/// by a gamma multiple. Hand each worker its own lane instead of sharing
/// one engine.
pub fn derive_seed(base: u64, lane: u64) -> u64 {
    split_mix64_at(base ^ lane.wrapping_mul(GOLDEN_GAMMA))
}
