//! Search configuration.

use std::fmt;

use augur_arima::{FitOptions, SarimaFit};
use augur_stationarity::StationarityConfig;

use crate::error::SearchError;

/// Default cap on the number of candidate fits per search.
pub const DEFAULT_MAX_EVALUATIONS: usize = 100;

/// Information criterion used to rank candidates. Lower is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Criterion {
    /// Akaike Information Criterion.
    #[default]
    Aic,
    /// Small-sample corrected AIC.
    Aicc,
    /// Bayesian Information Criterion.
    Bic,
}

impl Criterion {
    /// Scores a fitted model.
    pub fn score(self, fit: &SarimaFit) -> f64 {
        match self {
            Self::Aic => fit.aic(),
            Self::Aicc => fit.aicc(),
            Self::Bic => fit.bic(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aic => "AIC",
            Self::Aicc => "AICc",
            Self::Bic => "BIC",
        })
    }
}

/// How a differencing order is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Differencing {
    /// Determined by stationarity testing, bounded by the maximum.
    #[default]
    Auto,
    /// Used as given.
    Fixed(usize),
}

/// Settings for [`search`](crate::search).
///
/// Seasonal orders are only searched when `seasonal` is set and the period
/// is greater than 1; otherwise `P = D = Q = 0`.
///
/// # Example
///
/// ```
/// use augur_search::{Criterion, Differencing, SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_period(12)
///     .with_max_order(3, 3)
///     .with_d(Differencing::Fixed(1))
///     .with_criterion(Criterion::Bic);
///
/// assert!(config.validate().is_ok());
/// assert!(config.is_seasonal());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    seasonal: bool,
    period: usize,
    max_p: usize,
    max_q: usize,
    max_seasonal_p: usize,
    max_seasonal_q: usize,
    max_d: usize,
    max_seasonal_d: usize,
    d: Differencing,
    seasonal_d: Differencing,
    criterion: Criterion,
    stepwise: bool,
    max_evaluations: usize,
    intercept: Option<bool>,
    parallel: bool,
    stationarity: StationarityConfig,
    fit: FitOptions,
}

impl SearchConfig {
    /// Defaults: seasonal with period 1, `p, q ≤ 5`, `P, Q ≤ 2`, `d ≤ 2`,
    /// `D ≤ 1` (both automatic), AIC, stepwise, 100 evaluations, automatic
    /// intercept, parallel fits.
    pub fn new() -> Self {
        Self {
            seasonal: true,
            period: 1,
            max_p: 5,
            max_q: 5,
            max_seasonal_p: 2,
            max_seasonal_q: 2,
            max_d: 2,
            max_seasonal_d: 1,
            d: Differencing::Auto,
            seasonal_d: Differencing::Auto,
            criterion: Criterion::Aic,
            stepwise: true,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            intercept: None,
            parallel: true,
            stationarity: StationarityConfig::new(),
            fit: FitOptions::new(),
        }
    }

    /// Enables or disables the seasonal part of the search.
    pub fn with_seasonal(mut self, seasonal: bool) -> Self {
        self.seasonal = seasonal;
        self
    }

    /// Sets the seasonal period `m`.
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the maximum non-seasonal orders `p` and `q`.
    pub fn with_max_order(mut self, max_p: usize, max_q: usize) -> Self {
        self.max_p = max_p;
        self.max_q = max_q;
        self
    }

    /// Sets the maximum seasonal orders `P` and `Q`.
    pub fn with_max_seasonal_order(mut self, max_seasonal_p: usize, max_seasonal_q: usize) -> Self {
        self.max_seasonal_p = max_seasonal_p;
        self.max_seasonal_q = max_seasonal_q;
        self
    }

    /// Sets the maximum differencing orders `d` and `D`.
    pub fn with_max_differencing(mut self, max_d: usize, max_seasonal_d: usize) -> Self {
        self.max_d = max_d;
        self.max_seasonal_d = max_seasonal_d;
        self
    }

    /// Sets how `d` is chosen.
    pub fn with_d(mut self, d: Differencing) -> Self {
        self.d = d;
        self
    }

    /// Sets how `D` is chosen.
    pub fn with_seasonal_d(mut self, seasonal_d: Differencing) -> Self {
        self.seasonal_d = seasonal_d;
        self
    }

    /// Sets the ranking criterion.
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Chooses stepwise (`true`) or exhaustive grid search.
    pub fn with_stepwise(mut self, stepwise: bool) -> Self {
        self.stepwise = stepwise;
        self
    }

    /// Sets the hard cap on candidate fits.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = max_evaluations;
        self
    }

    /// Forces the intercept on or off; `None` selects it from `d + D`.
    pub fn with_intercept(mut self, intercept: Option<bool>) -> Self {
        self.intercept = intercept;
        self
    }

    /// Fits the candidates of one round on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the stationarity-test settings.
    pub fn with_stationarity(mut self, stationarity: StationarityConfig) -> Self {
        self.stationarity = stationarity;
        self
    }

    /// Sets the per-fit optimiser settings.
    pub fn with_fit_options(mut self, fit: FitOptions) -> Self {
        self.fit = fit;
        self
    }

    /// Returns whether seasonal orders are requested.
    pub fn seasonal(&self) -> bool {
        self.seasonal
    }

    /// Returns the seasonal period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Returns the maximum `p`.
    pub fn max_p(&self) -> usize {
        self.max_p
    }

    /// Returns the maximum `q`.
    pub fn max_q(&self) -> usize {
        self.max_q
    }

    /// Returns the maximum `P`, or 0 when the search is not seasonal.
    pub fn max_seasonal_p(&self) -> usize {
        if self.is_seasonal() { self.max_seasonal_p } else { 0 }
    }

    /// Returns the maximum `Q`, or 0 when the search is not seasonal.
    pub fn max_seasonal_q(&self) -> usize {
        if self.is_seasonal() { self.max_seasonal_q } else { 0 }
    }

    /// Returns the maximum `d`.
    pub fn max_d(&self) -> usize {
        self.max_d
    }

    /// Returns the maximum `D`, or 0 when the search is not seasonal.
    pub fn max_seasonal_d(&self) -> usize {
        if self.is_seasonal() { self.max_seasonal_d } else { 0 }
    }

    /// Returns the `d` policy.
    pub fn d(&self) -> Differencing {
        self.d
    }

    /// Returns the `D` policy.
    pub fn seasonal_d(&self) -> Differencing {
        self.seasonal_d
    }

    /// Returns the ranking criterion.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Returns `true` for stepwise search.
    pub fn stepwise(&self) -> bool {
        self.stepwise
    }

    /// Returns the evaluation cap.
    pub fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    /// Returns the intercept override.
    pub fn intercept(&self) -> Option<bool> {
        self.intercept
    }

    /// Returns whether candidate fits run in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the stationarity-test settings.
    pub fn stationarity(&self) -> &StationarityConfig {
        &self.stationarity
    }

    /// Returns the per-fit optimiser settings.
    pub fn fit_options(&self) -> &FitOptions {
        &self.fit
    }

    /// `true` when seasonal orders take part in the search.
    pub fn is_seasonal(&self) -> bool {
        self.seasonal && self.period > 1
    }

    /// Fit options with the intercept override applied.
    pub(crate) fn resolved_fit_options(&self) -> FitOptions {
        match self.intercept {
            Some(flag) => self.fit.clone().with_intercept(flag),
            None => self.fit.clone(),
        }
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SearchError::InvalidPeriod`] | `period == 0` |
    /// | [`SearchError::InvalidMaxEvaluations`] | `max_evaluations == 0` |
    /// | [`SearchError::DifferencingAboveMax`] | fixed `d > max_d` or fixed `D > max_D` |
    /// | [`SearchError::Stationarity`] | invalid stationarity settings |
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.period == 0 {
            return Err(SearchError::InvalidPeriod { period: 0 });
        }
        if self.max_evaluations == 0 {
            return Err(SearchError::InvalidMaxEvaluations);
        }
        if let Differencing::Fixed(d) = self.d
            && d > self.max_d
        {
            return Err(SearchError::DifferencingAboveMax {
                which: "d",
                value: d,
                max: self.max_d,
            });
        }
        if self.is_seasonal()
            && let Differencing::Fixed(seasonal_d) = self.seasonal_d
            && seasonal_d > self.max_seasonal_d
        {
            return Err(SearchError::DifferencingAboveMax {
                which: "D",
                value: seasonal_d,
                max: self.max_seasonal_d,
            });
        }
        self.stationarity.validate()?;
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
