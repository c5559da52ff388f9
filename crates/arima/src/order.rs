//! Seasonal ARIMA order `(p,d,q)(P,D,Q)[m]`.

use std::cmp::Ordering;
use std::fmt;

use crate::error::ArimaError;
use crate::fit::SarimaFit;
use crate::options::FitOptions;

/// An unfitted seasonal ARIMA order.
///
/// Create with [`OrderSpec::new()`] and optionally
/// [`OrderSpec::with_seasonal()`], then call [`OrderSpec::fit()`] to obtain
/// a [`SarimaFit`].
///
/// Orders sort lexicographically on `(p, q, P, Q, d, D, m)`, so that among
/// otherwise equal candidates the one with smaller ARMA orders comes first.
///
/// ```mermaid
/// graph LR
///     A["OrderSpec::new(p, d, q)"] -->|".with_seasonal(P, D, Q, m)"| A
///     A -->|".fit(&data, &options)?"| B["SarimaFit"]
///     B -->|".forecast(h, level)?"| C["Forecast"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrderSpec {
    p: usize,
    d: usize,
    q: usize,
    seasonal_p: usize,
    seasonal_d: usize,
    seasonal_q: usize,
    period: usize,
}

impl OrderSpec {
    /// Creates a non-seasonal ARIMA(p,d,q) order (period 1).
    ///
    /// # Example
    ///
    /// ```
    /// use augur_arima::OrderSpec;
    ///
    /// let order = OrderSpec::new(2, 1, 1).with_seasonal(1, 1, 0, 12);
    /// assert_eq!(order.to_string(), "ARIMA(2,1,1)(1,1,0)[12]");
    /// assert_eq!(order.n_coefficients(), 4);
    /// ```
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            p,
            d,
            q,
            seasonal_p: 0,
            seasonal_d: 0,
            seasonal_q: 0,
            period: 1,
        }
    }

    /// Sets the seasonal part `(P, D, Q)` and period `m`.
    pub fn with_seasonal(mut self, seasonal_p: usize, seasonal_d: usize, seasonal_q: usize, period: usize) -> Self {
        self.seasonal_p = seasonal_p;
        self.seasonal_d = seasonal_d;
        self.seasonal_q = seasonal_q;
        self.period = period;
        self
    }

    /// Non-seasonal AR order.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Regular differencing order.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Non-seasonal MA order.
    pub fn q(&self) -> usize {
        self.q
    }

    /// Seasonal AR order (`P`).
    pub fn seasonal_p(&self) -> usize {
        self.seasonal_p
    }

    /// Seasonal differencing order (`D`).
    pub fn seasonal_d(&self) -> usize {
        self.seasonal_d
    }

    /// Seasonal MA order (`Q`).
    pub fn seasonal_q(&self) -> usize {
        self.seasonal_q
    }

    /// Seasonal period (`m`); 1 means no seasonality.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of ARMA coefficients `p + q + P + Q`.
    pub fn n_coefficients(&self) -> usize {
        self.p + self.q + self.seasonal_p + self.seasonal_q
    }

    /// Degree of the expanded AR operator `p + m·P`.
    pub fn expanded_ar_order(&self) -> usize {
        self.p + self.period * self.seasonal_p
    }

    /// Degree of the expanded MA operator `q + m·Q`.
    pub fn expanded_ma_order(&self) -> usize {
        self.q + self.period * self.seasonal_q
    }

    /// Observations consumed by differencing, `d + m·D`.
    pub fn differencing_loss(&self) -> usize {
        self.d + self.period * self.seasonal_d
    }

    /// Returns `true` when the order has a seasonal component.
    pub fn is_seasonal(&self) -> bool {
        self.period > 1 && (self.seasonal_p + self.seasonal_d + self.seasonal_q) > 0
    }

    /// Minimum series length this order can be fitted to.
    pub fn min_observations(&self) -> usize {
        let state_dim = self.expanded_ar_order().max(self.expanded_ma_order() + 1);
        self.differencing_loss() + (state_dim + 1).max(3)
    }

    /// Checks that the period is at least 1 and that a period of 1 carries
    /// no seasonal orders.
    ///
    /// # Errors
    ///
    /// Returns [`ArimaError::InvalidOrder`].
    pub fn validate(&self) -> Result<(), ArimaError> {
        if self.period == 0 {
            return Err(ArimaError::InvalidOrder {
                reason: "period must be at least 1".into(),
            });
        }
        if self.period == 1 && (self.seasonal_p + self.seasonal_d + self.seasonal_q) > 0 {
            return Err(ArimaError::InvalidOrder {
                reason: "seasonal orders require a period greater than 1".into(),
            });
        }
        Ok(())
    }

    /// Fits this order to `data` by exact maximum likelihood.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InvalidOrder`] | period 0, or seasonal orders with period 1 |
    /// | [`ArimaError::EmptyData`] | `data` is empty |
    /// | [`ArimaError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ArimaError::InsufficientData`] | fewer than [`min_observations`](Self::min_observations) |
    /// | [`ArimaError::ConstantData`] | the differenced series is constant |
    /// | [`ArimaError::NonStationary`] | an AR block ends on the stationarity boundary |
    /// | [`ArimaError::NonInvertible`] | an MA block ends on the invertibility boundary |
    /// | [`ArimaError::SingularCovariance`] | a prediction variance is not positive |
    /// | [`ArimaError::OptimizationFailed`] | the optimiser runs out of iterations |
    pub fn fit(&self, data: &[f64], options: &FitOptions) -> Result<SarimaFit, ArimaError> {
        crate::optimizer::fit_sarima(data, *self, options)
    }

    fn sort_key(&self) -> [usize; 7] {
        [
            self.p,
            self.q,
            self.seasonal_p,
            self.seasonal_q,
            self.d,
            self.seasonal_d,
            self.period,
        ]
    }
}

impl Ord for OrderSpec {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for OrderSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ARIMA({},{},{})({},{},{})[{}]",
            self.p, self.d, self.q, self.seasonal_p, self.seasonal_d, self.seasonal_q, self.period
        )
    }
}
