//! Error types for augur-stationarity.

/// Reasons a stationarity test could not produce a verdict.
///
/// The `determine_*` entry points never return these; they log them and fall
/// back to a default differencing order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationarityError {
    /// Returned when there are too few observations for the test.
    #[error("too few observations for test: got {n}, need at least {min}")]
    TooShort {
        /// Number of observations available.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when a variance estimate the statistic divides by is zero.
    #[error("zero variance in test statistic")]
    ZeroVariance,

    /// Returned when the test regression cannot be solved.
    #[error("singular regression in unit-root test")]
    SingularRegression,

    /// Returned when the seasonal-strength threshold is not in `(0, 1)`.
    #[error("seasonal threshold must be in (0, 1), got {threshold}")]
    InvalidThreshold {
        /// The rejected threshold.
        threshold: f64,
    },
}
