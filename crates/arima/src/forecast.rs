//! Horizon forecasts with normal prediction intervals.

use crate::error::ForecastError;
use crate::fit::SarimaFit;
use crate::poly;

/// Interval level used when none is given.
pub const DEFAULT_LEVEL: f64 = 0.95;

/// One forecast step: point forecast and interval bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForecastPoint {
    /// Point forecast.
    pub mean: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
}

/// Forecasts for steps `1..=horizon`, with intervals at a common level.
#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
    variances: Vec<f64>,
    level: f64,
}

impl Forecast {
    /// Per-step forecasts, in horizon order.
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Point forecasts.
    pub fn means(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.mean).collect()
    }

    /// Lower interval bounds.
    pub fn lower(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lower).collect()
    }

    /// Upper interval bounds.
    pub fn upper(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.upper).collect()
    }

    /// Forecast-error variance of each step.
    pub fn variances(&self) -> &[f64] {
        &self.variances
    }

    /// Number of steps.
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    /// Interval level in `(0, 1)`.
    pub fn level(&self) -> f64 {
        self.level
    }
}

pub(crate) fn forecast(fit: &SarimaFit, horizon: usize, level: f64) -> Result<Forecast, ForecastError> {
    if horizon == 0 {
        return Err(ForecastError::InvalidHorizon { horizon });
    }
    if level.is_nan() || level <= 0.0 || level >= 1.0 {
        return Err(ForecastError::InvalidLevel { level });
    }

    let ar = fit.expanded_ar();
    let ma = fit.expanded_ma();

    // Propagate the last predicted state through the companion transition;
    // future shocks are 0.
    let mut state = fit.predicted_state().to_vec();
    let mut ahead = Vec::with_capacity(horizon);
    for _ in 0..horizon {
        let head = state.first().copied().unwrap_or(0.0);
        ahead.push(head);
        for i in 0..state.len() {
            let next = state.get(i + 1).copied().unwrap_or(0.0);
            state[i] = ar.get(i).copied().unwrap_or(0.0) * head + next;
        }
    }

    let mean = fit.intercept().unwrap_or(0.0);
    let differenced: Vec<f64> = ahead.iter().map(|v| v + mean).collect();
    let means = fit.differencing().integrate(&differenced);

    let order = fit.order();
    let integrated = poly::integrated_ar(ar, order.d(), order.seasonal_d(), order.period());
    let psi = poly::psi_weights(&integrated, ma, horizon);
    let z = augur_stats::normal_quantile((1.0 + level) / 2.0);

    let mut cumulative = 0.0;
    let mut variances = Vec::with_capacity(horizon);
    let mut points = Vec::with_capacity(horizon);
    for (mean, weight) in means.into_iter().zip(psi) {
        cumulative += weight * weight;
        let variance = fit.sigma2() * cumulative;
        let half_width = z * variance.sqrt();
        variances.push(variance);
        points.push(ForecastPoint {
            mean,
            lower: mean - half_width,
            upper: mean + half_width,
        });
    }

    Ok(Forecast {
        points,
        variances,
        level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::tests::stub_fit;
    use crate::order::OrderSpec;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_zero_horizon() {
        let fit = stub_fit(OrderSpec::new(0, 0, 0), None, -1.0, 10);
        assert_eq!(
            fit.forecast(0, 0.95),
            Err(ForecastError::InvalidHorizon { horizon: 0 })
        );
    }

    #[test]
    fn rejects_bad_levels() {
        let fit = stub_fit(OrderSpec::new(0, 0, 0), None, -1.0, 10);
        for level in [0.0, 1.0, -0.5, 1.5] {
            assert_eq!(
                fit.forecast(3, level),
                Err(ForecastError::InvalidLevel { level })
            );
        }
        assert!(fit.forecast(3, f64::NAN).is_err());
    }

    #[test]
    fn white_noise_forecast_is_intercept() {
        let fit = stub_fit(OrderSpec::new(0, 0, 0), Some(2.5), -1.0, 10);
        let fc = fit.forecast(4, DEFAULT_LEVEL).unwrap();
        assert_eq!(fc.horizon(), 4);
        assert_abs_diff_eq!(fc.level(), 0.95, epsilon = 1e-15);
        for p in fc.points() {
            assert_abs_diff_eq!(p.mean, 2.5, epsilon = 1e-12);
            // sigma2 = 1 -> half width = z_0.975
            assert_abs_diff_eq!(p.upper - p.mean, 1.959964, epsilon = 1e-5);
            assert_abs_diff_eq!(p.mean - p.lower, 1.959964, epsilon = 1e-5);
        }
        assert_eq!(fc.variances(), &[1.0; 4]);
    }

    #[test]
    fn ma_forecast_follows_predicted_state() {
        let mut fit = stub_fit(OrderSpec::new(0, 0, 1), Some(1.0), -1.0, 10);
        fit.set_state(&[], &[0.5], &[0.8, 0.3]);
        let fc = fit.forecast(3, DEFAULT_LEVEL).unwrap();
        for (got, want) in fc.means().into_iter().zip([1.8, 1.3, 1.0]) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(fc.variances()[1], 1.25, epsilon = 1e-12);
    }

    #[test]
    fn ar_forecast_decays_from_predicted_state() {
        let mut fit = stub_fit(OrderSpec::new(1, 0, 0), None, -1.0, 10);
        fit.set_state(&[0.5], &[], &[2.0]);
        let fc = fit.forecast(3, DEFAULT_LEVEL).unwrap();
        assert_eq!(fc.means(), vec![2.0, 1.0, 0.5]);
    }

    #[test]
    fn random_walk_variance_grows_linearly() {
        let fit = stub_fit(OrderSpec::new(0, 1, 0), None, -1.0, 10);
        let fc = fit.forecast(5, 0.8).unwrap();
        for (h, v) in fc.variances().iter().enumerate() {
            assert_abs_diff_eq!(*v, (h + 1) as f64, epsilon = 1e-12);
        }
        assert_eq!(fc.means(), vec![0.0; 5]);
        assert_eq!(fc.lower().len(), 5);
        assert_eq!(fc.upper().len(), 5);
    }
}
