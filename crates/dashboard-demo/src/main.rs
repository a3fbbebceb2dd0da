//! CityAssist Demo - Main Entry Point

use anyhow::Result;
use city_config::CityTables;
use clap::Parser;
use dashboard_demo::{init_logging, run_demo, DemoOptions};
use std::path::PathBuf;
use tracing::info;

/// Run the CityAssist predictors over synthetic city data and print the
/// dashboard payload as JSON
#[derive(Debug, Parser)]
#[command(name = "cityassist-demo", version, about)]
struct Cli {
    /// TOML file with lookup tables; reference tables when omitted
    #[arg(short, long, env = "CITYASSIST_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Days of air quality history per zone (at least one)
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// Number of synthetic outages
    #[arg(long, default_value_t = 5)]
    outages: usize,

    /// Number of simulated report classifications
    #[arg(long, default_value_t = 3)]
    reports: usize,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json)?;

    info!("=== CityAssist Demo v{} ===", env!("CARGO_PKG_VERSION"));

    let tables = CityTables::load(cli.config.as_deref())?;
    let options = DemoOptions {
        seed: cli.seed,
        days: cli.days,
        outages: cli.outages,
        reports: cli.reports,
        ..Default::default()
    };
    let report = run_demo(&tables, &options)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
