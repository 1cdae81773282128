//! Run plan analytics for every profile in a CSV file
//!
//! Writes one JSON report per line to stdout, in input order

use anyhow::{Context, Result};
use clap::Parser;
use plan_analytics::{
    projection::{DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS},
    profile::load_profiles_csv, AggregatorConfig, Assumptions, Product, StatisticsAggregator,
};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Batch plan analytics over a profiles CSV")]
struct Args {
    /// Profiles CSV (goals in FinancialGoals separated by ';')
    #[arg(long)]
    profiles: PathBuf,

    /// Selected product applied to every profile (repeatable)
    #[arg(long = "product")]
    products: Vec<String>,

    /// Projection horizon in years (1-100)
    #[arg(long, default_value_t = DEFAULT_PROJECTION_YEARS, value_parser = years_parser())]
    years: u32,

    /// Directory with assumption CSVs; built-in values when omitted
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn years_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_PROJECTION_YEARS))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let start = Instant::now();
    let profiles = load_profiles_csv(&args.profiles)
        .with_context(|| format!("Failed to load profiles from {}", args.profiles.display()))?;
    eprintln!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::default_bank(),
    };

    let config = AggregatorConfig {
        years: args.years,
        ..AggregatorConfig::default()
    };
    let products: Vec<Product> = args.products.iter().map(|p| Product::parse_arg(p)).collect();

    let run_start = Instant::now();
    let aggregator = StatisticsAggregator::new(assumptions, config);
    let reports = aggregator.aggregate_batch(&profiles, &products);
    eprintln!("Analytics complete in {:?}", run_start.elapsed());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for report in &reports {
        serde_json::to_writer(&mut out, report).context("Failed to serialize report")?;
        writeln!(out)?;
    }
    out.flush()?;

    log::info!("wrote {} reports in {:?}", reports.len(), start.elapsed());
    Ok(())
}
