//! Monte Carlo simulator for awakened enhancement costs.
//!
//! Runs many independent trials from level 0 to a target level on a fixed
//! worker pool and summarizes what they cost:
//! - Average, cheapest and most expensive trial
//! - Spread of attempt counts
//! - The costliest trial still under the 2-sigma bound

mod config;
mod report;
mod runner;

pub use config::{SimConfig, DEFAULT_MAX_LEVEL, DEFAULT_TRIALS, DEFAULT_WORKERS, MAX_WORKERS};
pub use report::{average, representative_at_bound, SimReport, REPRESENTATIVE_SIGMA};
pub use runner::{partition_trials, run_all, run_batch, run_simulation, worker_rng};
