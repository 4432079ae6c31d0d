//! Simulation report generation.

use crate::enhancement::{format_thousands, TrialResult};
use crate::error::{Result, SimError};
use crate::statistics;
use serde::Serialize;
use std::path::Path;

/// Sigma multiple used to pick the "unlucky but typical" trial.
pub const REPRESENTATIVE_SIGMA: f64 = 2.0;

/// Summary of a finished batch of trials.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub max_level: u8,
    pub num_trials: usize,
    /// Worker pool size, when the results came from a simulation run
    pub workers: Option<usize>,
    pub seed: Option<u64>,

    /// Componentwise mean of every field, truncated
    pub average: TrialResult,
    pub min: TrialResult,
    pub max: TrialResult,

    pub mean_attempts: f64,
    pub std_dev: f64,
    /// `mean + 2 * std_dev`, truncated
    pub upper_bound: i64,

    /// Highest-cost trial still strictly below `upper_bound`
    pub at_bound: Option<TrialResult>,

    /// All results, sorted by attempt count
    #[serde(skip)]
    pub results: Vec<TrialResult>,
}

/// Componentwise mean of `results`, each field truncated toward zero.
pub fn average(results: &[TrialResult]) -> TrialResult {
    let field_mean = |f: fn(&TrialResult) -> u64| -> u64 {
        let values: Vec<f64> = results.iter().map(|r| f(r) as f64).collect();
        statistics::mean(&values) as u64
    };
    TrialResult {
        attempt_count: field_mean(|r| r.attempt_count),
        recovery_tickets_used: field_mean(|r| r.recovery_tickets_used),
        acrum_v_uses: field_mean(|r| r.acrum_v_uses),
        acrum_x_uses: field_mean(|r| r.acrum_x_uses),
    }
}

/// Last result in `sorted` whose attempt count is strictly below `bound`.
pub fn representative_at_bound(sorted: &[TrialResult], bound: i64) -> Result<TrialResult> {
    sorted
        .iter()
        .rev()
        .find(|r| (r.attempt_count as i64) < bound)
        .copied()
        .ok_or(SimError::NoResultBelowBound { bound })
}

impl SimReport {
    /// Sort `results` and compute the summary. Fails only when there is
    /// nothing to summarize. A missing bound representative is kept as
    /// `None` and surfaced through [`SimReport::at_bound`].
    pub fn summarize(max_level: u8, mut results: Vec<TrialResult>) -> Result<Self> {
        if results.is_empty() {
            return Err(SimError::EmptyResults);
        }
        results.sort_by_key(|r| r.attempt_count);

        let counts: Vec<f64> = results.iter().map(|r| r.attempt_count as f64).collect();
        let mean_attempts = statistics::mean(&counts);
        let std_dev = statistics::standard_deviation(&counts);
        let upper_bound = statistics::upper_bound(&counts, REPRESENTATIVE_SIGMA) as i64;
        let at_bound = representative_at_bound(&results, upper_bound).ok();

        Ok(Self {
            max_level,
            num_trials: results.len(),
            workers: None,
            seed: None,
            average: average(&results),
            min: results[0],
            max: results[results.len() - 1],
            mean_attempts,
            std_dev,
            upper_bound,
            at_bound,
            results,
        })
    }

    /// Record how the results were produced.
    pub fn with_run_info(mut self, workers: usize, seed: Option<u64>) -> Self {
        self.workers = Some(workers);
        self.seed = seed;
        self
    }

    /// Standard deviation as shown in the report.
    pub fn std_dev_display(&self) -> i64 {
        self.std_dev as i64
    }

    pub fn at_bound(&self) -> Result<&TrialResult> {
        self.at_bound.as_ref().ok_or(SimError::NoResultBelowBound {
            bound: self.upper_bound,
        })
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("               AWAKENED ENHANCEMENT SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("The maximum level is {}\n", self.max_level));
        report.push_str(&format!("Trials: {}", format_thousands(self.num_trials as u64)));
        match self.workers {
            Some(1) => report.push_str(" on 1 worker"),
            Some(n) => report.push_str(&format!(" across {} workers", n)),
            None => {}
        }
        if let Some(seed) = self.seed {
            report.push_str(&format!(" (seed {})", seed));
        }
        report.push_str("\n\n");

        report.push_str("── AVERAGE ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("{}\n\n", self.average));

        report.push_str("── MIN ──────────────────────────────────────────────────────────\n");
        report.push_str(&format!("{}\n\n", self.min));

        report.push_str("── MAX ──────────────────────────────────────────────────────────\n");
        report.push_str(&format!("{}\n\n", self.max));

        report.push_str("── SPREAD ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Mean Attempts:     {:.2}\n",
            self.mean_attempts
        ));
        report.push_str(&format!(
            "  Std Deviation:     {}\n",
            self.std_dev_display()
        ));
        report.push_str(&format!("  2σ Upper Bound:    {}\n\n", self.upper_bound));

        report.push_str("── WORST TYPICAL (below 2σ) ─────────────────────────────────────\n");
        match self.at_bound() {
            Ok(result) => report.push_str(&format!("{}\n", result)),
            Err(e) => report.push_str(&format!("  ⚠️  {}\n", e)),
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Write the JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()).map_err(|e| SimError::ReportWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
