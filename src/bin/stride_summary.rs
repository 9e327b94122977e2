// ABOUTME: Driver binary producing one summary line per sensor package
// ABOUTME: Reads packages from a JSON file or falls back to built-in samples

//! Workout summary driver.
//!
//! Processes an ordered list of sensor packages and prints one formatted
//! summary line per package to stdout. Failures are logged per entry and do
//! not abort the remaining entries.
//!
//! Usage:
//! ```bash
//! # Summarize the built-in sample packages
//! cargo run --bin stride-summary
//!
//! # Summarize packages from a JSON file
//! cargo run --bin stride-summary -- --input packages.json
//!
//! # Verbose output
//! cargo run --bin stride-summary -- -v
//! ```
//!
//! Input file format: a JSON array of
//! `{"workout_type": "RUN", "readings": [15000, 1, 75]}` objects.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use stride_tracker::logging::LoggingConfig;
use stride_tracker::{read_package, SensorPackage};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "stride-summary",
    about = "Workout summary calculator",
    long_about = "Compute distance, mean speed, and calories burned for each sensor package"
)]
struct SummaryArgs {
    /// JSON file with sensor packages (uses built-in samples if not specified)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

/// Sample packages matching the reference sensor payloads
fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn load_packages(args: &SummaryArgs) -> Result<Vec<SensorPackage>> {
    match &args.input {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path.display()))?;
            let packages: Vec<SensorPackage> = serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse packages from {}", path.display()))?;
            Ok(packages)
        }
        None => Ok(sample_packages()),
    }
}

fn main() -> Result<()> {
    let args = SummaryArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let packages = load_packages(&args)?;
    info!(count = packages.len(), "processing sensor packages");

    let mut failed = 0_usize;
    for package in &packages {
        match read_package(&package.workout_type, &package.readings)
            .and_then(|workout| workout.summary())
        {
            Ok(summary) => println!("{summary}"),
            Err(error) => {
                failed += 1;
                warn!(
                    workout_type = package.workout_type.as_str(),
                    error = %error,
                    "skipping sensor package"
                );
            }
        }
    }

    if failed > 0 {
        warn!(failed, total = packages.len(), "some packages were skipped");
    }

    Ok(())
}
