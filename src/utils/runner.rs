//! Cross-case execution and CSV export.

use crate::registry::AlgorithmRunner;
use crate::utils::bench::{shuffle, time_seed, unit_name};
use crate::utils::timer::{measure_variants, TimingConfig, VariantResult};

/// One flat row of raw timing output, the CSV shape.
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_count: u64,
    pub result_sample: Option<f64>,
}

/// Results indexed `[algorithm][size][variant]`, plus the flat rows.
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<VariantResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every (algorithm, size) pair.
///
/// The pairs execute in a shuffled order, so no case always runs on a
/// freshly started (or freshly heated) machine; within a pair,
/// `measure_variants` interleaves the variants' samples the same way.
/// `seed` fixes each case's input data, the schedule stays random.
pub fn run_all_randomized(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    iterations: usize,
    seed: u64,
    config: &TimingConfig,
) -> GroupedResults {
    let mut results: Vec<Vec<Vec<VariantResult>>> = algorithms
        .iter()
        .map(|_| sizes.iter().map(|_| Vec::new()).collect())
        .collect();

    let mut slots: Vec<(usize, usize)> = (0..algorithms.len())
        .flat_map(|a| (0..sizes.len()).map(move |s| (a, s)))
        .collect();
    shuffle(&mut slots, time_seed());

    for (algo_idx, size_idx) in slots {
        let variants = algorithms[algo_idx].get_variant_closures(sizes[size_idx], seed);
        if variants.is_empty() {
            continue;
        }
        results[algo_idx][size_idx] = measure_variants(variants, iterations, config);
    }

    let mut raw_data = Vec::new();
    for (algo_idx, per_size) in results.iter().enumerate() {
        for (size_idx, variant_results) in per_size.iter().enumerate() {
            for result in variant_results {
                raw_data.push(RawTimingData {
                    algo_name: algorithms[algo_idx].name().to_string(),
                    variant_name: result.name.clone(),
                    input_size: sizes[size_idx],
                    avg_count: result.avg_nanos_f64 as u64,
                    result_sample: result.result_sample,
                });
            }
        }
    }

    GroupedResults { results, raw_data }
}

/// Write the flat rows as CSV. The average column is labeled with the
/// active measurement unit.
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "algorithm,variant,input_size,avg_{},result", unit_name())?;

    for entry in data {
        writeln!(
            file,
            "{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            entry.input_size,
            entry.avg_count,
            entry
                .result_sample
                .map(|v| v.to_string())
                .unwrap_or_default()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;

    #[test]
    fn test_run_all_randomized_fills_every_slot() {
        let registry = build_registry();
        let algorithms: Vec<&dyn AlgorithmRunner> =
            registry.all().iter().map(|a| a.as_ref()).collect();

        let config = TimingConfig {
            runs_per_variant: 2,
            warmup_iterations: 1,
            pin_strategy: crate::utils::timer::PinStrategy::Global,
        };
        let sizes = [2048];
        let grouped = run_all_randomized(&algorithms, &sizes, 2048, 42, &config);

        assert_eq!(grouped.results.len(), algorithms.len());
        for (algo, per_size) in algorithms.iter().zip(&grouped.results) {
            assert_eq!(per_size.len(), 1);
            assert_eq!(
                per_size[0].len(),
                algo.available_variants().len(),
                "{}",
                algo.name()
            );
        }
        assert!(!grouped.raw_data.is_empty());
    }

    #[test]
    fn test_export_csv_writes_one_row_per_entry() {
        let rows = vec![
            RawTimingData {
                algo_name: "prng_engines".to_string(),
                variant_name: "lehmer64".to_string(),
                input_size: 1024,
                avg_count: 123,
                result_sample: None,
            },
            RawTimingData {
                algo_name: "int_hash_schemes".to_string(),
                variant_name: "split_mix".to_string(),
                input_size: 1024,
                avg_count: 456,
                result_sample: Some(1024.0),
            },
        ];

        let path = std::env::temp_dir().join("bench_kit_csv_test.csv");
        let path = path.to_string_lossy().to_string();
        export_csv(&path, &rows).expect("csv write");

        let contents = std::fs::read_to_string(&path).expect("csv read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("algorithm,variant,input_size,avg_"));
        assert!(lines[1].starts_with("prng_engines,lehmer64,1024,123,"));
        assert!(lines[2].ends_with("1024"));
        let _ = std::fs::remove_file(&path);
    }
}
