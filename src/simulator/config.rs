//! Simulation configuration.

use crate::enhancement::validate_target;
use crate::error::{Result, SimError};
use std::path::PathBuf;

pub const DEFAULT_MAX_LEVEL: u8 = 9;
pub const DEFAULT_TRIALS: u32 = 1000;
pub const DEFAULT_WORKERS: usize = 4;
pub const MAX_WORKERS: usize = 256;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Level every trial enhances up to (1-9)
    pub max_level: u8,

    /// Total number of trials, split across workers
    pub trials: u32,

    /// Number of concurrent workers
    pub workers: usize,

    /// Random seed for reproducibility (None = random). Worker `i` uses
    /// `seed + i`.
    pub seed: Option<u64>,

    /// Where to write the JSON report, if anywhere
    pub json_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            trials: DEFAULT_TRIALS,
            workers: DEFAULT_WORKERS,
            seed: None,
            json_path: None,
        }
    }
}

impl SimConfig {
    /// Config for `trials` runs to `max_level` with default workers.
    pub fn new(max_level: u8, trials: u32) -> Self {
        Self {
            max_level,
            trials,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Check inputs before any trial runs.
    pub fn validate(&self) -> Result<()> {
        validate_target(self.max_level)?;
        if self.trials == 0 {
            return Err(SimError::InvalidTrialCount);
        }
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(SimError::InvalidWorkerCount {
                workers: self.workers,
                max: MAX_WORKERS,
            });
        }
        Ok(())
    }
}
