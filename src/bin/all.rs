//! Generic CLI for running the benchmark cases.
//!
//! Usage:
//!   bench-kit                 # Run every case
//!   bench-kit --list          # List available cases
//!   bench-kit prng_engines    # Run one case
//!   bench-kit --help          # Show help

use std::env;

use bench_kit::registry::build_registry;
use bench_kit::utils::bench::entropy_seed;
use bench_kit::utils::runner::export_csv;
use bench_kit::utils::timer::TimingConfig;
use bench_kit::utils::{clock, cpu_info};

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut show_list = false;
    let mut show_help = false;
    let mut sample_sizes: Vec<usize> = vec![64, 256, 1024, 4096, 16384];
    let mut iterations: usize = 10000;
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut case_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sample_sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--iter" | "-r" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or(10000);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                case_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        bench_kit::tui::print_help();
        return;
    }

    if show_list {
        bench_kit::tui::print_available_algorithms(&registry);
        return;
    }

    bench_kit::tui::print_header();
    cpu_info::print_build_banner();

    // Echo the seed so any run can be repeated exactly.
    let seed = seed.unwrap_or_else(entropy_seed);
    println!("Input seed: {}", seed);
    println!();

    let config = TimingConfig::default();
    let wall_start = clock::monotonic_micros();
    let cpu_start = clock::process_cpu_micros();

    match case_filter {
        Some(name) => match registry.find(&name) {
            Some(algo) => {
                bench_kit::tui::run_and_display(algo, &sample_sizes, iterations, seed, &config)
            }
            None => {
                eprintln!("Case '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => {
            let all_algos: Vec<_> = registry.all().iter().map(|a| a.as_ref()).collect();
            let grouped =
                bench_kit::run_all_randomized(&all_algos, &sample_sizes, iterations, seed, &config);
            if let Some(path) = csv_path {
                match export_csv(&path, &grouped.raw_data) {
                    Ok(()) => println!("Raw timings written to {}", path),
                    Err(e) => eprintln!("CSV export to {} failed: {}", path, e),
                }
            }
            bench_kit::tui::display_grouped(&all_algos, &sample_sizes, &grouped, iterations);
        }
    }

    let wall_ms = (clock::monotonic_micros() - wall_start) / 1000;
    match (cpu_start, clock::process_cpu_micros()) {
        (Some(start), Some(end)) => {
            println!("Total: {} ms wall, {} ms cpu", wall_ms, (end - start) / 1000)
        }
        _ => println!("Total: {} ms wall", wall_ms),
    }
    println!("Note: Speedup is relative to the first variant of each case.");
}
