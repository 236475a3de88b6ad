//! Growth Engine CLI
//!
//! Simulates a tracked work session through the real tick path, converts
//! the elapsed time to earnings, and projects the compounded future value.

use anyhow::{anyhow, Result};
use clap::Parser;
use growth_engine::projection::format;
use growth_engine::{Session, TimerSet};

#[derive(Parser, Debug)]
#[command(
    name = "growth_engine",
    about = "Track a work session and project its compounded value"
)]
struct Args {
    /// Minutes of work to simulate on each started activity
    #[arg(long, default_value_t = 10)]
    minutes: u32,

    /// How many of the 12 activities to start
    #[arg(long, default_value_t = 3)]
    activities: usize,

    /// Investment horizon in years
    #[arg(long, default_value_t = 15)]
    years: u32,

    /// Daily compound interest in percent
    #[arg(long, default_value_t = 0.1)]
    rate: f64,

    /// Emit the session report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Growth Engine v0.1.0");
    println!("====================\n");

    let timers = TimerSet::with_default_activities().map_err(|e| anyhow!("{e}"))?;
    let mut session = Session::new(timers);

    let started: Vec<u32> = session
        .timers()
        .timers()
        .iter()
        .take(args.activities)
        .map(|t| t.id())
        .collect();
    for id in &started {
        session.toggle(*id);
    }

    // Drive the real tick path; the loop stops the instant nothing runs
    for _ in 0..args.minutes * 60 {
        if !session.tick_required() {
            break;
        }
        session.tick();
    }

    let report = session.stop_all_and_calculate().clone();

    println!(
        "{:>3} {:<38} {:>9} {:>9} {:>8}",
        "Id", "Activity", "Elapsed", "Left", "Phase"
    );
    println!("{}", "-".repeat(72));
    for t in session.timers().timers() {
        println!(
            "{:>3} {:<38} {:>9} {:>9} {:>8}",
            t.id(),
            t.config.title,
            t.seconds_elapsed(),
            t.time_left,
            format!("{:?}", t.phase()),
        );
    }

    println!(
        "\nTotal earnings this session ({:.1} minutes): {}",
        report.minutes,
        format::format_vnd(report.amount)
    );

    match session.project(args.years, args.rate) {
        Some(Ok(value)) => println!(
            "Projected after {} years at {}%/day: {}",
            args.years,
            args.rate,
            format::format_projected(value)
        ),
        Some(Err(err)) => println!("Projection: {}", err),
        None => println!("Nothing to project: no positive earnings."),
    }

    if args.json {
        let projection_digits = match session.projection() {
            Some(Ok(value)) => Some(value.digits()),
            _ => None,
        };
        let payload = serde_json::json!({
            "started_at": session.started_at(),
            "earnings": report,
            "years": args.years,
            "daily_rate_percent": args.rate,
            "projection": projection_digits,
        });
        println!("\n{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
