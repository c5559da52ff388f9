//! Options for a single maximum-likelihood fit.

/// Default Nelder–Mead iteration budget per fit.
pub const DEFAULT_MAX_ITERS: u64 = 3000;

/// Default simplex standard-deviation tolerance.
pub const DEFAULT_SD_TOLERANCE: f64 = 1e-7;

/// Settings for [`OrderSpec::fit`](crate::OrderSpec::fit).
///
/// # Example
///
/// ```
/// use augur_arima::FitOptions;
///
/// let options = FitOptions::new().with_intercept(false).with_max_iters(500);
/// assert_eq!(options.intercept(), Some(false));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    intercept: Option<bool>,
    max_iters: u64,
    sd_tolerance: f64,
}

impl FitOptions {
    /// Defaults: automatic intercept, 3000 iterations, tolerance 1e-7.
    pub fn new() -> Self {
        Self {
            intercept: None,
            max_iters: DEFAULT_MAX_ITERS,
            sd_tolerance: DEFAULT_SD_TOLERANCE,
        }
    }

    /// Forces the intercept on or off.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.intercept = Some(intercept);
        self
    }

    /// Restores automatic intercept selection.
    pub fn with_auto_intercept(mut self) -> Self {
        self.intercept = None;
        self
    }

    /// Sets the optimiser's iteration budget.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the simplex standard-deviation tolerance.
    pub fn with_sd_tolerance(mut self, sd_tolerance: f64) -> Self {
        self.sd_tolerance = sd_tolerance;
        self
    }

    /// `Some(flag)` when forced, `None` for automatic selection.
    pub fn intercept(&self) -> Option<bool> {
        self.intercept
    }

    /// Returns the optimiser's iteration budget.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the simplex standard-deviation tolerance.
    pub fn sd_tolerance(&self) -> f64 {
        self.sd_tolerance
    }

    /// Whether a fit with `total_differencing = d + D` includes an
    /// intercept. Automatic selection includes it when at most one
    /// difference is taken.
    pub fn resolve_intercept(&self, total_differencing: usize) -> bool {
        self.intercept.unwrap_or(total_differencing <= 1)
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = FitOptions::default();
        assert_eq!(opts.intercept(), None);
        assert_eq!(opts.max_iters(), 3000);
        assert!((opts.sd_tolerance() - 1e-7).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_intercept_rule() {
        let opts = FitOptions::new();
        assert!(opts.resolve_intercept(0));
        assert!(opts.resolve_intercept(1));
        assert!(!opts.resolve_intercept(2));
    }

    #[test]
    fn forced_intercept() {
        assert!(!FitOptions::new().with_intercept(false).resolve_intercept(0));
        assert!(FitOptions::new().with_intercept(true).resolve_intercept(2));
        assert_eq!(
            FitOptions::new().with_intercept(true).with_auto_intercept().intercept(),
            None
        );
    }
}
