//! Parallel trial runner.
//!
//! Trials are split across a fixed pool of workers. Each worker owns its RNG
//! and trial states and runs its whole partition on tokio's blocking pool.
//! The only shared data is the read-only schedule. Results are merged once
//! every worker has finished, and any worker failure fails the whole run.

use super::config::SimConfig;
use super::report::SimReport;
use crate::enhancement::{run_trial, Schedule, TrialResult};
use crate::error::{Result, SimError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Split `trials` into `workers` near-equal partitions. The first
/// `trials % workers` partitions get one extra trial.
pub fn partition_trials(trials: u32, workers: usize) -> Vec<u32> {
    if workers == 0 {
        return Vec::new();
    }
    // Divide in usize so a huge worker count cannot wrap to zero
    let total = trials as usize;
    let base = total / workers;
    let extra = total % workers;
    (0..workers)
        .map(|i| {
            let size = if i < extra { base + 1 } else { base };
            u32::try_from(size).unwrap_or(trials)
        })
        .collect()
}

/// RNG for one worker: `seed + index` when seeded, entropy otherwise.
pub fn worker_rng(seed: Option<u64>, index: usize) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run `count` trials back to back. Results are in execution order.
pub fn run_batch(
    count: u32,
    target_level: u8,
    schedule: &Schedule,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<TrialResult>> {
    (0..count)
        .map(|_| run_trial(target_level, schedule, rng))
        .collect()
}

/// Run every trial in `config` and return all results.
///
/// Batches are appended in the order workers finish, so only the order within
/// a batch is meaningful.
pub async fn run_all(config: &SimConfig, schedule: Arc<Schedule>) -> Result<Vec<TrialResult>> {
    config.validate()?;

    let partitions = partition_trials(config.trials, config.workers);
    let mut workers = JoinSet::new();

    for (index, count) in partitions.into_iter().enumerate() {
        let schedule = Arc::clone(&schedule);
        let target_level = config.max_level;
        let mut rng = worker_rng(config.seed, index);
        workers.spawn_blocking(move || {
            debug!(worker = index, trials = count, "worker started");
            let batch = run_batch(count, target_level, &schedule, &mut rng);
            debug!(worker = index, ok = batch.is_ok(), "worker finished");
            batch
        });
    }

    let mut results = Vec::with_capacity(config.trials as usize);
    while let Some(joined) = workers.join_next().await {
        let batch = joined.map_err(|e| SimError::WorkerFailed(e.to_string()))??;
        results.extend(batch);
    }

    info!(
        trials = results.len(),
        workers = config.workers,
        max_level = config.max_level,
        "simulation complete"
    );
    Ok(results)
}

/// Run the full simulation with the standard schedule and summarize it.
pub async fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let schedule = Arc::new(Schedule::standard());
    let results = run_all(config, schedule).await?;
    let report = SimReport::summarize(config.max_level, results)?;
    Ok(report.with_run_info(config.workers, config.seed))
}
