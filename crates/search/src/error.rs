//! Error types for augur-search.

use augur_series::SeriesError;
use augur_stationarity::StationarityError;

/// Errors that cross the search boundary.
///
/// Individual fit failures never appear here; they are recorded on the
/// candidate as [`FitOutcome::Invalid`](crate::FitOutcome::Invalid).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Returned when the input series is unusable for the configured search.
    #[error("invalid series: {0}")]
    Data(#[from] SeriesError),

    /// Returned when the seasonal period is zero.
    #[error("seasonal period must be at least 1, got {period}")]
    InvalidPeriod {
        /// The rejected period.
        period: usize,
    },

    /// Returned when the evaluation budget is zero.
    #[error("max_evaluations must be at least 1")]
    InvalidMaxEvaluations,

    /// Returned when a fixed differencing order exceeds its maximum.
    #[error("fixed {which} = {value} exceeds its maximum {max}")]
    DifferencingAboveMax {
        /// `"d"` or `"D"`.
        which: &'static str,
        /// The fixed order.
        value: usize,
        /// The configured maximum.
        max: usize,
    },

    /// Returned when the stationarity settings are invalid.
    #[error("invalid stationarity settings: {0}")]
    Stationarity(#[from] StationarityError),

    /// Returned when every evaluated candidate failed to fit.
    #[error("search exhausted: all {evaluated} candidate models failed to fit")]
    Exhausted {
        /// Number of candidates evaluated.
        evaluated: usize,
    },
}
