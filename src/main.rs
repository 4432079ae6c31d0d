//! Awakened enhancement cost simulator CLI.
//!
//! Usage:
//!   awaken-sim [OPTIONS]
//!
//! Examples:
//!   awaken-sim                      # 1000 trials to level 9
//!   awaken-sim -m 5 -t 100000       # 100k trials to level 5
//!   awaken-sim --seed 42 --json out.json

use awaken_sim::build_info;
use awaken_sim::simulator::{
    run_simulation, SimConfig, DEFAULT_MAX_LEVEL, DEFAULT_TRIALS, DEFAULT_WORKERS,
};
use awaken_sim::SimError;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Simulate awakened enhancement and report what reaching a level costs.
#[derive(Parser, Debug)]
#[command(name = "awaken-sim")]
#[command(version = build_info::LONG_VERSION)]
#[command(about = "Estimate the cost of awakened enhancement by Monte Carlo simulation", long_about = None)]
struct Cli {
    /// Target awakened enhancement level (1-9)
    #[arg(short, long, default_value_t = DEFAULT_MAX_LEVEL)]
    max_level: u8,

    /// Number of trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: u32,

    /// Number of concurrent workers
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also write the report as JSON (default: awaken_report_<timestamp>.json)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    json: Option<Option<PathBuf>>,

    /// Log worker activity
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for SimConfig {
    fn from(cli: Cli) -> Self {
        Self {
            max_level: cli.max_level,
            trials: cli.trials,
            workers: cli.workers,
            seed: cli.seed,
            json_path: cli.json.map(|path| path.unwrap_or_else(default_json_path)),
        }
    }
}

fn default_json_path() -> PathBuf {
    PathBuf::from(format!(
        "awaken_report_{}.json",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: SimConfig) -> Result<(), SimError> {
    config.validate()?;
    info!(
        max_level = config.max_level,
        trials = config.trials,
        workers = config.workers,
        "starting simulation"
    );

    let report = run_simulation(&config).await?;
    println!("{}", report.to_text());

    if let Err(e) = report.at_bound() {
        warn!("{}", e);
    }

    if let Some(path) = &config.json_path {
        report.write_json(path)?;
        println!("JSON report saved to: {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(SimConfig::from(cli)).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
