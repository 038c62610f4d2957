//! Rentencheck CLI
//!
//! Projects one client intake and prints the result as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use rentencheck::intake::load_intakes;
use rentencheck::parameters::{load_settings, loader::DEFAULT_SETTINGS_PATH, FallbackProvider, ParameterProvider};
use rentencheck::{ProjectionConfig, ProjectionEngine};

#[derive(Debug, Parser)]
#[command(name = "rentencheck", version, about = "Pension gap projection for one client intake")]
struct Args {
    /// Intake JSON (single object, or an array whose first record is projected)
    #[arg(long)]
    intake: PathBuf,

    /// Settings CSV export
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Calculation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Fill settings missing on the calculation date with the German 2024 defaults
    #[arg(long)]
    fallback_defaults: bool,

    /// Use the intake's own inflation assumption
    #[arg(long)]
    intake_inflation: bool,

    /// Print only the flat chart payload
    #[arg(long)]
    chart: bool,

    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = load_settings(&args.settings)
        .with_context(|| format!("loading settings from {}", args.settings.display()))?;
    let provider: Box<dyn ParameterProvider> = if args.fallback_defaults {
        Box::new(FallbackProvider::new(store))
    } else {
        Box::new(store)
    };

    let intake = load_intakes(&args.intake)
        .with_context(|| format!("loading intake from {}", args.intake.display()))?
        .into_iter()
        .next()
        .with_context(|| format!("{} contains no intake", args.intake.display()))?;

    let as_of = args.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
    let config = ProjectionConfig {
        use_intake_inflation: args.intake_inflation,
    };

    let engine = ProjectionEngine::new(provider, config);
    let result = engine.compute_projection(&intake, as_of)?;

    let json = match (args.chart, args.pretty) {
        (true, true) => serde_json::to_string_pretty(&result.chart_data())?,
        (true, false) => serde_json::to_string(&result.chart_data())?,
        (false, true) => serde_json::to_string_pretty(&result)?,
        (false, false) => serde_json::to_string(&result)?,
    };
    println!("{json}");

    Ok(())
}
