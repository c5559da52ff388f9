//! Fitted seasonal ARIMA model results.

use crate::diff::Differencing;
use crate::error::ForecastError;
use crate::forecast::{self, Forecast};
use crate::order::OrderSpec;
use crate::params::Coefficients;

/// A fitted seasonal ARIMA model produced by [`OrderSpec::fit()`].
///
/// Contains the estimated coefficients of each block, the optional
/// intercept, innovation variance (`sigma2`), residuals and
/// log-likelihood, together with the history needed to forecast.
///
/// ```mermaid
/// graph LR
///     B["SarimaFit"] --> C[".ar() / .seasonal_ar()"]
///     B --> D[".ma() / .seasonal_ma()"]
///     B --> E[".sigma2()"]
///     B --> F[".aic() / .aicc() / .bic()"]
///     B --> G[".forecast(h, level)"]
/// ```
#[derive(Clone, Debug)]
pub struct SarimaFit {
    order: OrderSpec,
    coefficients: Coefficients,
    intercept: Option<f64>,
    sigma2: f64,
    residuals: Vec<f64>,
    log_likelihood: f64,
    /// Expanded `φ(B)Φ(B^m)`, right-hand-side form.
    expanded_ar: Vec<f64>,
    /// Expanded `θ(B)Θ(B^m)`.
    expanded_ma: Vec<f64>,
    /// Kalman predicted state after the last observation.
    predicted_state: Vec<f64>,
    differencing: Differencing,
}

/// Everything the optimiser hands over to build a [`SarimaFit`].
pub(crate) struct FitParts {
    pub(crate) order: OrderSpec,
    pub(crate) coefficients: Coefficients,
    pub(crate) intercept: Option<f64>,
    pub(crate) sigma2: f64,
    pub(crate) residuals: Vec<f64>,
    pub(crate) log_likelihood: f64,
    pub(crate) expanded_ar: Vec<f64>,
    pub(crate) expanded_ma: Vec<f64>,
    pub(crate) predicted_state: Vec<f64>,
    pub(crate) differencing: Differencing,
}

impl SarimaFit {
    pub(crate) fn new(parts: FitParts) -> Self {
        Self {
            order: parts.order,
            coefficients: parts.coefficients,
            intercept: parts.intercept,
            sigma2: parts.sigma2,
            residuals: parts.residuals,
            log_likelihood: parts.log_likelihood,
            expanded_ar: parts.expanded_ar,
            expanded_ma: parts.expanded_ma,
            predicted_state: parts.predicted_state,
            differencing: parts.differencing,
        }
    }

    /// Returns the [`OrderSpec`] that produced this fit.
    pub fn order(&self) -> OrderSpec {
        self.order
    }

    /// Non-seasonal AR coefficients (`φ`).
    pub fn ar(&self) -> &[f64] {
        &self.coefficients.ar
    }

    /// Non-seasonal MA coefficients (`θ`).
    pub fn ma(&self) -> &[f64] {
        &self.coefficients.ma
    }

    /// Seasonal AR coefficients (`Φ`).
    pub fn seasonal_ar(&self) -> &[f64] {
        &self.coefficients.seasonal_ar
    }

    /// Seasonal MA coefficients (`Θ`).
    pub fn seasonal_ma(&self) -> &[f64] {
        &self.coefficients.seasonal_ma
    }

    /// Mean of the differenced series, when an intercept is included.
    pub fn intercept(&self) -> Option<f64> {
        self.intercept
    }

    /// Innovation variance (`sigma2`).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// One-step-ahead prediction errors on the differenced series.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Maximised log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Number of observations the likelihood was computed on (after
    /// differencing).
    pub fn n_used(&self) -> usize {
        self.residuals.len()
    }

    /// Number of estimated parameters `p + q + P + Q`, plus one for the
    /// intercept.
    pub fn n_params(&self) -> usize {
        self.order.n_coefficients() + usize::from(self.intercept.is_some())
    }

    /// Akaike Information Criterion, `−2·logL + 2k`.
    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood + 2.0 * self.n_params() as f64
    }

    /// Small-sample corrected AIC, `AIC + 2k(k+1)/(n−k−1)`.
    ///
    /// Infinite when `n − k − 1 ≤ 0`.
    pub fn aicc(&self) -> f64 {
        let k = self.n_params() as f64;
        let denom = self.n_used() as f64 - k - 1.0;
        if denom <= 0.0 {
            return f64::INFINITY;
        }
        self.aic() + 2.0 * k * (k + 1.0) / denom
    }

    /// Bayesian Information Criterion, `−2·logL + k·ln n`.
    pub fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood + self.n_params() as f64 * (self.n_used() as f64).ln()
    }

    /// Forecasts `horizon` steps past the end of the fitted series with
    /// symmetric intervals at `level` (e.g. [`DEFAULT_LEVEL`](crate::DEFAULT_LEVEL)).
    ///
    /// # Errors
    ///
    /// - [`ForecastError::InvalidHorizon`] if `horizon == 0`.
    /// - [`ForecastError::InvalidLevel`] unless `0 < level < 1`.
    pub fn forecast(&self, horizon: usize, level: f64) -> Result<Forecast, ForecastError> {
        forecast::forecast(self, horizon, level)
    }

    pub(crate) fn expanded_ar(&self) -> &[f64] {
        &self.expanded_ar
    }

    pub(crate) fn expanded_ma(&self) -> &[f64] {
        &self.expanded_ma
    }

    pub(crate) fn predicted_state(&self) -> &[f64] {
        &self.predicted_state
    }

    pub(crate) fn differencing(&self) -> &Differencing {
        &self.differencing
    }
}
