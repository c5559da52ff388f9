//! KPSS level-stationarity test.

use crate::UnitRootOutcome;
use crate::config::Significance;
use crate::error::StationarityError;

/// Minimum number of observations for the statistic.
const MIN_OBS: usize = 3;

/// Level critical values (Kwiatkowski et al. 1992, Table 1).
pub(crate) fn critical_value(significance: Significance) -> f64 {
    match significance {
        Significance::OnePercent => 0.739,
        Significance::FivePercent => 0.463,
        Significance::TenPercent => 0.347,
    }
}

/// Truncation lag of the Newey–West estimator: `trunc(3·√n / 13)`.
pub(crate) fn short_lags(n: usize) -> usize {
    (3.0 * (n as f64).sqrt() / 13.0).trunc() as usize
}

/// Computes the KPSS statistic for level stationarity.
///
/// The null hypothesis is stationarity, so the series is declared stationary
/// when the statistic stays below the critical value.
///
/// # Errors
///
/// - [`StationarityError::TooShort`] for fewer than 3 observations.
/// - [`StationarityError::ZeroVariance`] when the long-run variance is zero.
pub fn kpss(data: &[f64], significance: Significance) -> Result<UnitRootOutcome, StationarityError> {
    let n = data.len();
    if n < MIN_OBS {
        return Err(StationarityError::TooShort { n, min: MIN_OBS });
    }
    let nf = n as f64;
    let mean = augur_stats::mean(data);
    let resid: Vec<f64> = data.iter().map(|x| x - mean).collect();

    let mut partial = 0.0;
    let mut eta = 0.0;
    for e in &resid {
        partial += e;
        eta += partial * partial;
    }
    eta /= nf * nf;

    let lags = short_lags(n);
    let mut long_run = resid.iter().map(|e| e * e).sum::<f64>() / nf;
    for lag in 1..=lags.min(n - 1) {
        let weight = 1.0 - lag as f64 / (lags + 1) as f64;
        let cov: f64 = resid[lag..]
            .iter()
            .zip(resid.iter())
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / nf;
        long_run += 2.0 * weight * cov;
    }

    if !long_run.is_finite() || long_run <= 0.0 {
        return Err(StationarityError::ZeroVariance);
    }

    let statistic = eta / long_run;
    let critical = critical_value(significance);
    Ok(UnitRootOutcome {
        statistic,
        critical_value: critical,
        lags,
        stationary: statistic < critical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn short_lag_rule() {
        assert_eq!(short_lags(10), 0);
        assert_eq!(short_lags(100), 2);
        assert_eq!(short_lags(96), 2);
        assert_eq!(short_lags(500), 5);
    }

    #[test]
    fn hand_computed_statistic() {
        // [1, 2, 3, 4]: lags = 0, resid = [-1.5, -0.5, 0.5, 1.5]
        // partial sums -1.5, -2, -1.5, 0 -> squares 2.25 + 4 + 2.25 = 8.5, /16
        // long-run variance = 5/4
        let out = kpss(&[1.0, 2.0, 3.0, 4.0], Significance::FivePercent).unwrap();
        assert_eq!(out.lags, 0);
        assert_abs_diff_eq!(out.statistic, (8.5 / 16.0) / 1.25, epsilon = 1e-12);
        assert!(out.stationary);
    }

    #[test]
    fn too_short() {
        assert_eq!(
            kpss(&[1.0, 2.0], Significance::FivePercent),
            Err(StationarityError::TooShort { n: 2, min: 3 })
        );
    }

    #[test]
    fn constant_has_zero_variance() {
        assert_eq!(
            kpss(&[4.0; 20], Significance::FivePercent),
            Err(StationarityError::ZeroVariance)
        );
    }

    #[test]
    fn linear_trend_rejected() {
        let data: Vec<f64> = (0..200).map(|i| i as f64).collect();
        let out = kpss(&data, Significance::OnePercent).unwrap();
        assert!(!out.stationary, "statistic {}", out.statistic);
    }
}
