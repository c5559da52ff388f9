//! Statistical helper functions shared by the augur crates.

mod linalg;

use statrs::distribution::{ContinuousCDF, Normal};

pub use linalg::solve;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Biased sample autocovariance at `lag` (N denominator, as in R's `acf()`).
///
/// Returns 0.0 when `lag >= data.len()`.
pub fn autocovariance(data: &[f64], lag: usize) -> f64 {
    let n = data.len();
    if lag >= n {
        return 0.0;
    }
    let m = mean(data);
    data[lag..]
        .iter()
        .zip(data.iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / n as f64
}

/// Returns `true` when every element equals the first one to within
/// machine precision (relative to the data's magnitude).
pub fn is_constant(data: &[f64]) -> bool {
    let min_val = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_val = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let scale = min_val.abs().max(max_val.abs()).max(1.0);
    (max_val - min_val).abs() <= f64::EPSILON * scale * 16.0
}

/// Lag-1 difference `x[t] - x[t-1]`, applied `order` times.
///
/// Each pass shortens the series by one; an exhausted series is returned
/// empty.
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut out = data.to_vec();
    for _ in 0..order {
        if out.len() < 2 {
            return Vec::new();
        }
        out = out.windows(2).map(|w| w[1] - w[0]).collect();
    }
    out
}

/// Seasonal difference `x[t] - x[t-lag]`, applied `order` times.
///
/// Each pass shortens the series by `lag`; an exhausted series is returned
/// empty.
pub fn seasonal_difference(data: &[f64], lag: usize, order: usize) -> Vec<f64> {
    let mut out = data.to_vec();
    for _ in 0..order {
        if lag == 0 || out.len() <= lag {
            return Vec::new();
        }
        out = out[lag..]
            .iter()
            .zip(out.iter())
            .map(|(cur, prev)| cur - prev)
            .collect();
    }
    out
}

/// Standard normal quantile `Φ⁻¹(p)`.
///
/// Returns NaN for `p` outside `(0, 1)`.
pub fn normal_quantile(p: f64) -> f64 {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return f64::NAN;
    }
    Normal::standard().inverse_cdf(p)
}
