//! Evaluated candidate models.

use std::time::Duration;

use augur_arima::{ArimaError, Forecast, ForecastError, OrderSpec, SarimaFit};

/// Result of fitting one candidate order.
#[derive(Debug, Clone)]
pub enum FitOutcome {
    /// The fit succeeded.
    Valid(SarimaFit),
    /// The fit failed; the candidate can never be selected.
    Invalid(ArimaError),
}

/// An order together with its fit outcome and criterion value.
///
/// Invalid candidates carry a criterion of `+∞`.
#[derive(Debug, Clone)]
pub struct CandidateModel {
    order: OrderSpec,
    outcome: FitOutcome,
    criterion: f64,
    elapsed: Duration,
}

impl CandidateModel {
    pub(crate) fn new(order: OrderSpec, outcome: FitOutcome, criterion: f64, elapsed: Duration) -> Self {
        let criterion = match outcome {
            FitOutcome::Valid(_) if criterion.is_finite() => criterion,
            _ => f64::INFINITY,
        };
        Self {
            order,
            outcome,
            criterion,
            elapsed,
        }
    }

    /// Returns the candidate's order.
    pub fn order(&self) -> OrderSpec {
        self.order
    }

    /// Returns the fit outcome.
    pub fn outcome(&self) -> &FitOutcome {
        &self.outcome
    }

    /// Returns the criterion value (`+∞` when invalid).
    pub fn criterion(&self) -> f64 {
        self.criterion
    }

    /// Wall-clock time spent fitting.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `true` when the fit succeeded with a finite criterion.
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, FitOutcome::Valid(_)) && self.criterion.is_finite()
    }

    /// Returns the fitted model, if any.
    pub fn fit(&self) -> Option<&SarimaFit> {
        match &self.outcome {
            FitOutcome::Valid(fit) => Some(fit),
            FitOutcome::Invalid(_) => None,
        }
    }

    /// Returns the fit error, if any.
    pub fn error(&self) -> Option<&ArimaError> {
        match &self.outcome {
            FitOutcome::Valid(_) => None,
            FitOutcome::Invalid(err) => Some(err),
        }
    }

    /// Consumes the candidate and returns the fitted model, if any.
    pub fn into_fit(self) -> Option<SarimaFit> {
        match self.outcome {
            FitOutcome::Valid(fit) => Some(fit),
            FitOutcome::Invalid(_) => None,
        }
    }

    /// Forecasts `horizon` steps ahead; see [`forecast`].
    ///
    /// # Errors
    ///
    /// See [`forecast`].
    pub fn forecast(&self, horizon: usize, level: f64) -> Result<Forecast, ForecastError> {
        forecast(self, horizon, level)
    }
}

/// Forecasts `horizon` steps past the end of the series the candidate was
/// fitted to, with intervals at `level`.
///
/// # Errors
///
/// - [`ForecastError::InvalidModel`] if the candidate failed to fit.
/// - [`ForecastError::InvalidHorizon`] if `horizon == 0`.
/// - [`ForecastError::InvalidLevel`] unless `0 < level < 1`.
pub fn forecast(model: &CandidateModel, horizon: usize, level: f64) -> Result<Forecast, ForecastError> {
    match &model.outcome {
        FitOutcome::Valid(fit) => fit.forecast(horizon, level),
        FitOutcome::Invalid(err) => Err(ForecastError::InvalidModel(err.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid() -> CandidateModel {
        CandidateModel::new(
            OrderSpec::new(1, 0, 1),
            FitOutcome::Invalid(ArimaError::NonInvertible),
            12.0,
            Duration::ZERO,
        )
    }

    #[test]
    fn invalid_candidate_has_infinite_criterion() {
        let c = invalid();
        assert!(!c.is_valid());
        assert_eq!(c.criterion(), f64::INFINITY);
        assert!(c.fit().is_none());
        assert_eq!(c.error(), Some(&ArimaError::NonInvertible));
    }

    #[test]
    fn forecast_on_invalid_candidate_fails() {
        let err = forecast(&invalid(), 3, 0.95).unwrap_err();
        assert_eq!(err, ForecastError::InvalidModel(ArimaError::NonInvertible));
    }

    #[test]
    fn valid_candidate_forecasts() {
        let data: Vec<f64> = (0..60).map(|i| (i as f64 * 0.7).sin() * 3.0 + 0.1 * i as f64).collect();
        let order = OrderSpec::new(0, 1, 0);
        let fit = order.fit(&data, &augur_arima::FitOptions::new()).unwrap();
        let aic = fit.aic();
        let c = CandidateModel::new(order, FitOutcome::Valid(fit), aic, Duration::ZERO);
        assert!(c.is_valid());
        let fc = c.forecast(4, 0.9).unwrap();
        assert_eq!(fc.horizon(), 4);
        assert!(c.into_fit().is_some());
    }
}
