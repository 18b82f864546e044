//! Terminal output: tables, boxes, help text.

use terminal_size::{terminal_size, Width};

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::runner::GroupedResults;
use crate::utils::timer::{measure_variants, TimingConfig};

/// Current terminal width, clamped to something printable.
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate with an ellipsis when `s` exceeds `width` characters.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Boxed summary of one case: name, category, description, variants.
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Case:     {}", algo.name());
    let cat_line = format!("Category: {}", algo.category());
    let desc_line = algo.description().to_string();
    let var_line = format!("Variants: {}", algo.available_variants().join(", "));

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [&name_line, &cat_line, &desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Results table for one (case, size) pair. The first variant is the
/// baseline for the speedup and relative-error columns.
pub fn print_results_table(results: &[BenchmarkResult], size: usize, iterations: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_avg = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!("  Size: {} ({} iterations per sample)", size, iterations);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg = result.avg_time.as_nanos() as f64;
        let speedup = if avg > 0.0 { baseline_avg / avg } else { 0.0 };
        let cv = if avg > 0.0 {
            result.std_dev.as_nanos() as f64 / avg
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(sample), Some(base)) => {
                let diff = (sample - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Measure and print one case across all sizes.
pub fn run_and_display(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    iterations: usize,
    seed: u64,
    config: &TimingConfig,
) {
    print_algo_info_box(algo);
    for &size in sizes {
        let variants = algo.get_variant_closures(size, seed);
        if variants.is_empty() {
            continue;
        }
        let results = measure_variants(variants, iterations, config);
        print_results_table(&results, size, iterations);
    }
}

/// Print grouped results from a whole-registry run, in registration
/// order regardless of the measurement schedule.
pub fn display_grouped(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    grouped: &GroupedResults,
    iterations: usize,
) {
    for (algo_idx, algo) in algorithms.iter().enumerate() {
        let per_size = &grouped.results[algo_idx];
        if per_size.iter().all(|results| results.is_empty()) {
            continue;
        }
        print_algo_info_box(*algo);
        for (size_idx, results) in per_size.iter().enumerate() {
            print_results_table(results, sizes[size_idx], iterations);
        }
    }
}

/// Application header.
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Bench-Kit ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Usage text.
pub fn print_help() {
    println!("Usage: bench-kit [OPTIONS] [CASE]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available cases");
    println!("  --help, -h     Show this help message");
    println!("  --sizes SIZES  Comma-separated input sizes (default: 64,256,1024,4096,16384)");
    println!("  --iter N, -r   Inner iterations reported per sample (default: 10000)");
    println!("  --seed N       Seed for the case inputs (default: OS entropy)");
    println!("  --csv PATH     Export raw timings to CSV (whole-registry runs only)");
    println!();
    println!("Arguments:");
    println!("  CASE           Name of one case to run (omit to run everything)");
    println!();
    println!("Examples:");
    println!("  bench-kit                     # Run every case");
    println!("  bench-kit prng_engines        # Run only the engine comparison");
    println!("  bench-kit --list              # List cases");
    println!("  bench-kit --sizes 128,512     # Custom sizes");
    println!("  bench-kit --seed 12345        # Reproducible inputs");
    println!("  bench-kit --csv data.csv      # Keep the raw numbers");
}

/// One line per registered case.
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available cases:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}
