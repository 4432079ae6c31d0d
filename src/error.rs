//! Error types for the enhancement simulator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// The schedule has no condition for this level. This is a table defect,
    /// so it aborts the whole run.
    #[error("no enhancement condition registered for level {0}")]
    ConditionNotFound(u8),

    #[error("max level {level} is out of range. Please specify a value between 1 and {max}.")]
    InvalidMaxLevel { level: u8, max: u8 },

    #[error("trial count must be at least 1")]
    InvalidTrialCount,

    #[error("worker count {workers} is out of range. Please specify a value between 1 and {max}.")]
    InvalidWorkerCount { workers: usize, max: usize },

    /// A worker task panicked or was cancelled before returning its batch.
    #[error("simulation worker failed: {0}")]
    WorkerFailed(String),

    #[error("cannot summarize an empty result set")]
    EmptyResults,

    #[error("no trial finished strictly below the 2-sigma bound of {bound} attempts")]
    NoResultBelowBound { bound: i64 },

    #[error("failed to write report to {path}: {reason}")]
    ReportWrite { path: String, reason: String },
}

impl SimError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::InvalidMaxLevel { .. }
            | SimError::InvalidTrialCount
            | SimError::InvalidWorkerCount { .. } => 2,
            SimError::ConditionNotFound(_) | SimError::WorkerFailed(_) => 3,
            SimError::EmptyResults | SimError::NoResultBelowBound { .. } => 4,
            SimError::ReportWrite { .. } => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
