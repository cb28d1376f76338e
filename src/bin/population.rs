//! Prints day-by-day population totals for a comma-separated countdown list
//! read from stdin.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use adventkit::population::{parse_timers, Histogram};

#[derive(Parser)]
#[command(
    name = "population",
    version,
    about = "Simulates countdown-driven population growth"
)]
struct Cli {
    /// Number of days to simulate
    days: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading countdown list from stdin")?;

    let timers = parse_timers(&input)?;
    let histogram = Histogram::from_timers(&timers)?;
    tracing::debug!(
        initial = histogram.total(),
        days = cli.days,
        "starting simulation"
    );

    for (day, state) in (1..=cli.days).zip(histogram.simulate()) {
        println!("{}: {}", day, state.total());
    }
    Ok(())
}
