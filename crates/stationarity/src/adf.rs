//! Augmented Dickey–Fuller unit-root test with a constant.

use ndarray::Array2;

use crate::UnitRootOutcome;
use crate::config::Significance;
use crate::error::StationarityError;

/// Asymptotic critical values of the t-statistic, constant-only model.
pub(crate) fn critical_value(significance: Significance) -> f64 {
    match significance {
        Significance::OnePercent => -3.43,
        Significance::FivePercent => -2.86,
        Significance::TenPercent => -2.57,
    }
}

/// Number of lagged differences: `trunc((n-1)^(1/3))`.
pub(crate) fn default_lags(n: usize) -> usize {
    (n.saturating_sub(1) as f64).cbrt().trunc() as usize
}

/// Runs the ADF regression
/// `Δy_t = α + β·y_{t−1} + Σ γ_i·Δy_{t−i}` and tests `β = 0`.
///
/// The null hypothesis is a unit root, so the series is declared stationary
/// when the t-statistic on β falls below the critical value.
///
/// # Errors
///
/// - [`StationarityError::TooShort`] when the regression has too few rows.
/// - [`StationarityError::SingularRegression`] when the normal equations
///   cannot be solved.
/// - [`StationarityError::ZeroVariance`] when the regression fits exactly.
pub fn adf(data: &[f64], significance: Significance) -> Result<UnitRootOutcome, StationarityError> {
    let n = data.len();
    let lags = default_lags(n);
    let n_params = lags + 2;
    let min = 2 * lags + 5;
    if n < min {
        return Err(StationarityError::TooShort { n, min });
    }

    let diff = augur_stats::difference(data, 1);
    // Rows t = lags..diff.len(): regress diff[t] on 1, data[t], diff[t-1..t-lags].
    let rows = diff.len() - lags;

    let mut xtx = Array2::<f64>::zeros((n_params, n_params));
    let mut xty = vec![0.0; n_params];
    let mut regressors = vec![0.0; n_params];
    for t in lags..diff.len() {
        regressors[0] = 1.0;
        regressors[1] = data[t];
        for i in 1..=lags {
            regressors[1 + i] = diff[t - i];
        }
        for a in 0..n_params {
            xty[a] += regressors[a] * diff[t];
            for b in 0..n_params {
                xtx[[a, b]] += regressors[a] * regressors[b];
            }
        }
    }

    let beta = augur_stats::solve(&xtx, &xty).ok_or(StationarityError::SingularRegression)?;

    let mut rss = 0.0;
    for t in lags..diff.len() {
        let mut fitted = beta[0] + beta[1] * data[t];
        for i in 1..=lags {
            fitted += beta[1 + i] * diff[t - i];
        }
        let r = diff[t] - fitted;
        rss += r * r;
    }
    let dof = (rows - n_params) as f64;
    let s2 = rss / dof;
    if s2.is_nan() || s2 <= 0.0 {
        return Err(StationarityError::ZeroVariance);
    }

    // Second diagonal element of (X'X)^-1.
    let mut unit = vec![0.0; n_params];
    unit[1] = 1.0;
    let column = augur_stats::solve(&xtx, &unit).ok_or(StationarityError::SingularRegression)?;
    let var_beta = s2 * column[1];
    if var_beta.is_nan() || var_beta <= 0.0 {
        return Err(StationarityError::SingularRegression);
    }

    let statistic = beta[1] / var_beta.sqrt();
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

    #[test]
    fn lag_rule() {
        assert_eq!(default_lags(9), 2);
        assert_eq!(default_lags(28), 3);
        assert_eq!(default_lags(100), 4);
    }

    #[test]
    fn too_short() {
        // n = 6 -> lags 1 -> need 7
        assert_eq!(
            adf(&[1.0, 3.0, 2.0, 5.0, 4.0, 6.0], Significance::FivePercent),
            Err(StationarityError::TooShort { n: 6, min: 7 })
        );
    }

    #[test]
    fn linear_trend_is_singular() {
        // Every lagged difference equals the constant column.
        let data: Vec<f64> = (0..50).map(|i| i as f64).collect();
        assert_eq!(
            adf(&data, Significance::FivePercent),
            Err(StationarityError::SingularRegression)
        );
    }
}
