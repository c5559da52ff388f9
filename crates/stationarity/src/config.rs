//! Configuration for differencing-order determination.

use crate::error::StationarityError;

/// Unit-root test used to choose the regular differencing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitRootTest {
    /// Kwiatkowski–Phillips–Schmidt–Shin test; null hypothesis is level
    /// stationarity.
    #[default]
    Kpss,
    /// Augmented Dickey–Fuller test; null hypothesis is a unit root.
    Adf,
}

/// Significance level at which a test verdict is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Significance {
    /// 1% level.
    OnePercent,
    /// 5% level.
    #[default]
    FivePercent,
    /// 10% level.
    TenPercent,
}

impl Significance {
    /// Maps `0.01`, `0.05` or `0.10` to a level. Other values are not
    /// tabulated and return `None`.
    pub fn from_alpha(alpha: f64) -> Option<Self> {
        const TOL: f64 = 1e-9;
        if (alpha - 0.01).abs() < TOL {
            Some(Self::OnePercent)
        } else if (alpha - 0.05).abs() < TOL {
            Some(Self::FivePercent)
        } else if (alpha - 0.10).abs() < TOL {
            Some(Self::TenPercent)
        } else {
            None
        }
    }

    /// Returns the nominal alpha.
    pub fn alpha(self) -> f64 {
        match self {
            Self::OnePercent => 0.01,
            Self::FivePercent => 0.05,
            Self::TenPercent => 0.10,
        }
    }
}

/// Seasonal strength at or above which a series is treated as seasonal.
pub const DEFAULT_SEASONAL_THRESHOLD: f64 = 0.64;

/// Settings for [`determine_d`](crate::determine_d) and
/// [`determine_seasonal_d`](crate::determine_seasonal_d).
///
/// # Example
///
/// ```
/// use augur_stationarity::{Significance, StationarityConfig, UnitRootTest};
///
/// let config = StationarityConfig::new()
///     .with_test(UnitRootTest::Adf)
///     .with_significance(Significance::TenPercent);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StationarityConfig {
    test: UnitRootTest,
    significance: Significance,
    seasonal_threshold: f64,
}

impl StationarityConfig {
    /// Defaults: KPSS at 5%, seasonal threshold 0.64.
    pub fn new() -> Self {
        Self {
            test: UnitRootTest::Kpss,
            significance: Significance::FivePercent,
            seasonal_threshold: DEFAULT_SEASONAL_THRESHOLD,
        }
    }

    /// Sets the unit-root test.
    pub fn with_test(mut self, test: UnitRootTest) -> Self {
        self.test = test;
        self
    }

    /// Sets the significance level.
    pub fn with_significance(mut self, significance: Significance) -> Self {
        self.significance = significance;
        self
    }

    /// Sets the seasonal-strength threshold.
    pub fn with_seasonal_threshold(mut self, threshold: f64) -> Self {
        self.seasonal_threshold = threshold;
        self
    }

    /// Returns the unit-root test.
    pub fn test(&self) -> UnitRootTest {
        self.test
    }

    /// Returns the significance level.
    pub fn significance(&self) -> Significance {
        self.significance
    }

    /// Returns the seasonal-strength threshold.
    pub fn seasonal_threshold(&self) -> f64 {
        self.seasonal_threshold
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StationarityError::InvalidThreshold`] if the seasonal
    /// threshold is not strictly between 0 and 1.
    pub fn validate(&self) -> Result<(), StationarityError> {
        let t = self.seasonal_threshold;
        if t.is_nan() || t <= 0.0 || t >= 1.0 {
            return Err(StationarityError::InvalidThreshold { threshold: t });
        }
        Ok(())
    }
}

impl Default for StationarityConfig {
    fn default() -> Self {
        Self::new()
    }
}
