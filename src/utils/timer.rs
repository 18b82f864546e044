//! Variant measurement: warm-up, randomized sample schedule, statistics.
//!
//! One timing path for every case. Variants time themselves inside their
//! closure (via `measure!`), this module decides when each sample runs,
//! pins the CPU around it, and reduces the raw samples to a
//! `VariantResult`.

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed, to_nanos, Measurement};
pub use super::cpu_affinity::{pin_to_current_core, unpin, CpuPinGuard};

/// CPU pinning strategy while sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once for the whole run.
    Global,
    /// Pin and unpin around every sample.
    #[default]
    PerExecution,
}

/// Sampling configuration.
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Samples collected per variant.
    pub runs_per_variant: usize,
    /// Untimed executions per variant before sampling starts.
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// One measurable implementation of a case.
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs one sample and reports (self-timed measurement, optional
    /// result figure). Timing inside the closure keeps call dispatch out
    /// of the measured region.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Statistics for one variant after a measurement run.
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Average as a `Duration`; raw count under the cycles feature.
    pub avg_time: Duration,
    /// Average without the integer truncation, for ratio math.
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Inner iterations per sample, echoed for reporting.
    pub iterations: usize,
    /// Result figure from the last sample, for cross-variant agreement.
    pub result_sample: Option<f64>,
}

/// Measure a set of variants.
///
/// All variants are warmed up first, then samples run in one shuffled
/// schedule across variants, so no variant owns a quiet (or noisy)
/// stretch of the machine.
pub fn measure_variants(
    mut variants: Vec<Variant>,
    iterations: usize,
    config: &TimingConfig,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // Schedule entries are (variant index, sample index); only the order
    // matters after the shuffle.
    let mut schedule: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    shuffle(&mut schedule, time_seed());

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for (variant_idx, _) in schedule {
        let variant = &mut variants[variant_idx];
        let _sample_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (measured, result) = (variant.run)();

        measurements[variant_idx].push(measured);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let collected = std::mem::take(&mut measurements[idx]);
            compute_variant_result(
                variant.name,
                variant.description,
                collected,
                iterations,
                result_samples[idx].take(),
            )
        })
        .collect()
}

fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: Vec<Measurement>,
    iterations: usize,
    result_sample: Option<f64>,
) -> VariantResult {
    if measurements.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            iterations,
            result_sample: None,
        };
    }

    let counts: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();

    let mut sorted = counts.clone();
    sorted.sort_unstable();
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let median = sorted[sorted.len() / 2];

    let avg_nanos_f64 = counts.iter().sum::<u64>() as f64 / counts.len() as f64;

    let variance: f64 = counts
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_nanos_f64;
            diff * diff
        })
        .sum::<f64>()
        / (counts.len() - 1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos_f64 as u64),
        avg_nanos_f64,
        median_time: Duration::from_nanos(median),
        min_time: Duration::from_nanos(min),
        max_time: Duration::from_nanos(max),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        iterations,
        result_sample,
    }
}
