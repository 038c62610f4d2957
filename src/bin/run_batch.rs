//! Run projections for a whole book of clients
//!
//! Reads an array of intakes, projects them in parallel and writes a CSV gap summary

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::warn;
use serde::Serialize;

use rentencheck::intake::load_intakes;
use rentencheck::parameters::{load_settings, loader::DEFAULT_SETTINGS_PATH, FallbackProvider};
use rentencheck::{ProjectionConfig, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Pension gap summary for many intakes")]
struct Args {
    /// JSON array of intakes
    #[arg(long)]
    intakes: PathBuf,

    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    #[arg(long)]
    as_of: Option<NaiveDate>,

    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    #[arg(long)]
    fallback_defaults: bool,
}

/// One summary line per intake
#[derive(Debug, Serialize)]
struct SummaryRow {
    client: String,
    status: String,
    years_to_retirement: Option<i32>,
    gap_today: Option<f64>,
    gap_at_retirement: Option<f64>,
    gap_at_life_expectancy: Option<f64>,
    required_capital: Option<f64>,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let intakes = load_intakes(&args.intakes)
        .with_context(|| format!("loading intakes from {}", args.intakes.display()))?;
    println!("Loaded {} intakes in {:?}", intakes.len(), start.elapsed());

    let store = load_settings(&args.settings)
        .with_context(|| format!("loading settings from {}", args.settings.display()))?;
    let as_of = args.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());

    let proj_start = Instant::now();
    let results = if args.fallback_defaults {
        ScenarioRunner::new(FallbackProvider::new(store), ProjectionConfig::default())
            .run_batch(&intakes, as_of)?
    } else {
        ScenarioRunner::new(store, ProjectionConfig::default()).run_batch(&intakes, as_of)?
    };
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut failed = 0;

    for (i, (intake, result)) in intakes.iter().zip(&results).enumerate() {
        let client = intake.client.clone().unwrap_or_else(|| format!("#{}", i + 1));
        let row = match result {
            Ok(projection) => SummaryRow {
                client,
                status: "ok".to_string(),
                years_to_retirement: Some(projection.years_to_retirement),
                gap_today: Some(round_cents(projection.pension_gap.today)),
                gap_at_retirement: Some(round_cents(projection.pension_gap.at_retirement)),
                gap_at_life_expectancy: Some(round_cents(projection.pension_gap.at_life_expectancy)),
                required_capital: Some(round_cents(projection.required_capital_at_retirement())),
            },
            Err(err) => {
                failed += 1;
                warn!("intake {} rejected: {}", client, err);
                SummaryRow {
                    client,
                    status: err.to_string(),
                    years_to_retirement: None,
                    gap_today: None,
                    gap_at_retirement: None,
                    gap_at_life_expectancy: None,
                    required_capital: None,
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary:");
    println!("  Projected: {}", results.len() - failed);
    println!("  Rejected:  {}", failed);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
