use std::path::Path;
use std::process;

use firmament_bench::args::{parse_args, BenchArgs, Command, USAGE};
use firmament_bench::report;
use firmament_bench::runner::{BenchmarkResult, BenchmarkRunner};
use firmament_bench::scenes;
use firmament_config::{load_config_file, load_default_config, LoadError, SkyConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(raw.iter().map(String::as_str)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            eprintln!("{USAGE}");
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            process::exit(1);
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(1);
        }
    };

    let runner = BenchmarkRunner::new(config, args.ticks, args.step_seconds);
    let results: Vec<BenchmarkResult> = scenes::standard_scenes()
        .iter()
        .filter_map(|scene| {
            runner
                .run_scene(scene)
                .map_err(|e| log::warn!("Skipping scene '{}': {e}", scene.name))
                .ok()
        })
        .collect();

    println!("\n## Sky Update Timings\n");
    println!("{}", report::format_markdown(&results));

    if let Some(path) = &args.output {
        save_results(path, &results);
    }
    if let Some(path) = &args.baseline {
        if check_regressions(path, &results, args.regression_threshold) > 0 {
            process::exit(1);
        }
    }

    log::info!("Ran {} scenes.", results.len());
}

fn load_config(args: &BenchArgs) -> Result<SkyConfig, LoadError> {
    match &args.config {
        Some(path) => load_config_file(path),
        None => load_default_config(),
    }
}

fn save_results(path: &Path, results: &[BenchmarkResult]) {
    let baseline = report::Baseline {
        timestamp: run_timestamp(),
        results: results.to_vec(),
    };
    match report::save_baseline(path, &baseline) {
        Ok(()) => log::info!("Saved baseline to {}", path.display()),
        Err(e) => log::error!("Could not write baseline {}: {e}", path.display()),
    }
}

/// Compare against a saved baseline and return how many scenes regressed.
fn check_regressions(path: &Path, results: &[BenchmarkResult], threshold: f64) -> usize {
    let Some(baseline) = report::load_baseline(path) else {
        log::warn!("Baseline file not found: {}", path.display());
        return 0;
    };
    let regressions = report::compare(results, &baseline, threshold);
    println!("{}", report::format_comparison(&regressions, threshold));
    if !regressions.is_empty() {
        eprintln!("ERROR: {} scenes slower than baseline", regressions.len());
    }
    regressions.len()
}

/// Seconds since the Unix epoch, tagged with the process id.
fn run_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("bench-{secs}-{}", process::id())
}
