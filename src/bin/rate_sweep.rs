//! Sweep projections across a grid of daily rates and horizons
//!
//! Prints one line per scenario and writes the full grid to CSV for
//! spreadsheet comparison.

use anyhow::Result;
use clap::Parser;
use growth_engine::scenario::{ScenarioResult, ScenarioRunner};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rate_sweep", about = "Grid sweep of the projection engine")]
struct Args {
    /// Daily contribution in currency minor units
    #[arg(long, default_value_t = 150_000.0)]
    principal: f64,

    /// Output CSV path
    #[arg(long, default_value = "rate_sweep.csv")]
    out: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rates = [0.01, 0.05, 0.1, 0.2, 0.5, 1.0];
    let years = [1u32, 5, 10, 15, 20, 30];

    println!(
        "Sweeping {} scenarios at {} per day...",
        rates.len() * years.len(),
        args.principal
    );
    let start = Instant::now();

    let runner = ScenarioRunner::new();
    // One grid row per rate, projected in parallel
    let results: Vec<Vec<ScenarioResult>> = rates
        .par_iter()
        .map(|&rate| runner.run_grid(args.principal, &[rate], &years))
        .collect();

    println!("Done in {:?}\n", start.elapsed());

    for row in results.iter().flatten() {
        println!(
            "  {:>6.3}%/day {:>3}y  {}",
            row.daily_rate_percent, row.years, row.display
        );
    }

    let mut file = File::create(&args.out)?;
    writeln!(file, "DailyRatePercent,Years,Value,Display")?;
    for row in results.iter().flatten() {
        writeln!(
            file,
            "{},{},{},{}",
            row.daily_rate_percent,
            row.years,
            row.value.as_deref().unwrap_or(""),
            row.display,
        )?;
    }

    println!("\nFull results written to: {}", args.out);
    Ok(())
}
