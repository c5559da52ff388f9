//! Seasonal strength from a classical additive decomposition.

use crate::error::StationarityError;

/// Centred moving average of width `m` (a 2×m average when `m` is even).
///
/// Returns the trend for indices `half..n-half` together with `half`.
fn centred_moving_average(data: &[f64], m: usize) -> (Vec<f64>, usize) {
    let n = data.len();
    let half = m / 2;
    let mf = m as f64;
    let trend = (half..n - half)
        .map(|t| {
            if m % 2 == 0 {
                let inner: f64 = data[t + 1 - half..t + half].iter().sum();
                (0.5 * data[t - half] + inner + 0.5 * data[t + half]) / mf
            } else {
                data[t - half..=t + half].iter().sum::<f64>() / mf
            }
        })
        .collect();
    (trend, half)
}

/// Seasonal strength `F_S = max(0, 1 − Var(R) / Var(S + R))` for period `m`.
///
/// The trend is a centred moving average, the seasonal component is the
/// per-position mean of the detrended series (centred to sum to zero) and
/// the remainder is what is left over. Values near 1 indicate a strong
/// seasonal pattern.
///
/// # Errors
///
/// - [`StationarityError::TooShort`] when `m < 2` or the series has fewer
///   than `2·m` observations.
/// - [`StationarityError::ZeroVariance`] when the detrended series is flat.
pub fn seasonal_strength(data: &[f64], m: usize) -> Result<f64, StationarityError> {
    let n = data.len();
    let min = 2 * m.max(2);
    if m < 2 || n < min {
        return Err(StationarityError::TooShort { n, min });
    }

    let (trend, offset) = centred_moving_average(data, m);
    let detrended: Vec<f64> = trend
        .iter()
        .enumerate()
        .map(|(i, tr)| data[i + offset] - tr)
        .collect();

    let mut sums = vec![0.0; m];
    let mut counts = vec![0usize; m];
    for (i, v) in detrended.iter().enumerate() {
        let pos = (i + offset) % m;
        sums[pos] += v;
        counts[pos] += 1;
    }
    let mut seasonal: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
        .collect();
    let centre = augur_stats::mean(&seasonal);
    for s in &mut seasonal {
        *s -= centre;
    }

    let remainder: Vec<f64> = detrended
        .iter()
        .enumerate()
        .map(|(i, v)| v - seasonal[(i + offset) % m])
        .collect();

    let var_sr = augur_stats::variance(&detrended);
    if !var_sr.is_finite() || var_sr <= f64::EPSILON * augur_stats::variance(data) {
        return Err(StationarityError::ZeroVariance);
    }
    let var_r = augur_stats::variance(&remainder);
    Ok((1.0 - var_r / var_sr).max(0.0))
}
