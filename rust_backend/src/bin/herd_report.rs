//! Growth report for a single animal or batch.
//!
//! Usage:
//! ```text
//! herd-report --series weights.csv --species Beef --initial-weight 250 \
//!             --period-days 30 --feed-consumed 400
//! ```
//!
//! Prints the report as JSON on stdout. Set `RUST_LOG=debug` to see which rows
//! were dropped and how the date column was read.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use herd_analytics::parsing::load_timeseries_csv;
use herd_analytics::{build_report, AdgMethod, AnalyticsConfig, ReportRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Livestock growth and profitability report")]
struct Args {
    /// Weigh-in CSV (date or day column, then weight)
    #[arg(long)]
    series: Option<PathBuf>,

    /// Species name used for benchmarks (Beef, Pig, Broiler, ...)
    #[arg(long)]
    species: String,

    /// Weight at the start of the period (kg)
    #[arg(long)]
    initial_weight: f64,

    /// Current weight (kg); defaults to the latest weigh-in
    #[arg(long)]
    current_weight: Option<f64>,

    /// Target weight (kg); defaults to the species benchmark
    #[arg(long)]
    target_weight: Option<f64>,

    /// Length of the reporting period in days
    #[arg(long)]
    period_days: i64,

    /// Feed consumed over the period (kg)
    #[arg(long)]
    feed_consumed: f64,

    /// Market price per kg live weight
    #[arg(long)]
    price_per_kg: Option<f64>,

    /// Feed cost per kg
    #[arg(long)]
    feed_cost_per_kg: Option<f64>,

    /// ADG source: summary or time-series
    #[arg(long, default_value = "time-series")]
    method: AdgMethod,

    /// Configuration file (searches for herd.toml when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Identifier echoed in the report
    #[arg(long)]
    animal_id: Option<String>,
}

fn load_config(path: Option<&PathBuf>) -> Result<AnalyticsConfig> {
    let path = match path {
        Some(path) => Some(path.clone()),
        None => AnalyticsConfig::default_location(),
    };
    match path {
        Some(path) => AnalyticsConfig::from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => {
            log::debug!("No herd.toml found; using built-in defaults");
            Ok(AnalyticsConfig::default())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    let series = args
        .series
        .as_deref()
        .map(|path| {
            load_timeseries_csv(path)
                .with_context(|| format!("Failed to read weigh-ins from {}", path.display()))
        })
        .transpose()?;

    let request = ReportRequest {
        animal_id: args.animal_id,
        species: args.species,
        initial_weight: args.initial_weight,
        current_weight: args.current_weight,
        target_weight: args.target_weight,
        period_days: args.period_days,
        feed_consumed: args.feed_consumed,
        price_per_kg: args.price_per_kg,
        feed_cost_per_kg: args.feed_cost_per_kg,
        adg_method: args.method,
    };

    let report = build_report(&request, series.as_ref(), &config)
        .context("Failed to build growth report")?;

    for insight in &report.insights {
        log::info!("[{:?}] {}", insight.level, insight.message);
    }

    let json = serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
    println!("{}", json);

    Ok(())
}
