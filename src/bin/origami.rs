//! Reads dots and fold instructions from stdin, prints the dot count after
//! each fold and a rendering of the final sheet.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use adventkit::origami::{parse_input, Paper};

#[derive(Parser)]
#[command(
    name = "origami",
    version,
    about = "Folds a dotted transparency and renders the result"
)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let _cli = Cli::parse();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading dots and fold instructions from stdin")?;

    let (dots, folds) = parse_input(&input)?;
    let mut paper: Paper = dots.into_iter().collect();
    tracing::debug!(dots = paper.len(), folds = folds.len(), "parsed input");

    for (n, fold) in folds.into_iter().enumerate() {
        paper = paper.fold(fold)?;
        println!("Fold {}: {} dots", n + 1, paper.len());
    }
    print!("{paper}");
    Ok(())
}
