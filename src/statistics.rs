//! Descriptive statistics over attempt counts and other per-trial tallies.
//!
//! Everything here is population statistics (denominator `n`), matching how
//! the report describes a completed batch rather than estimating a wider
//! population. Empty input yields `0.0` instead of NaN so callers never have
//! to special-case it when formatting.

pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    sum(data) / data.len() as f64
}

/// Signed distance of every sample from the mean.
pub fn deviations(data: &[f64]) -> Vec<f64> {
    let m = mean(data);
    data.iter().map(|x| x - m).collect()
}

/// Population variance: mean of squared deviations.
pub fn variance(data: &[f64]) -> f64 {
    let squared: Vec<f64> = deviations(data).iter().map(|d| d * d).collect();
    mean(&squared)
}

pub fn standard_deviation(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// `mean + n_sigma * stddev`
pub fn upper_bound(data: &[f64], n_sigma: f64) -> f64 {
    mean(data) + n_sigma * standard_deviation(data)
}

/// `mean - n_sigma * stddev`. Not clamped at zero, so it can go negative for
/// wide distributions of small counts.
pub fn lower_bound(data: &[f64], n_sigma: f64) -> f64 {
    mean(data) - n_sigma * standard_deviation(data)
}
