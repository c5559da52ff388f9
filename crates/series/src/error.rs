//! Error types for augur-series.

/// Error type for constructing and slicing a [`TimeSeries`](crate::TimeSeries).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the series has no observations.
    #[error("time series is empty")]
    Empty,

    /// Returned when timestamps and values have different lengths.
    #[error("length mismatch: {timestamps} timestamps vs {values} values")]
    LengthMismatch {
        /// Number of timestamps supplied.
        timestamps: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// Returned when a value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFinite {
        /// Position of the first offending value.
        index: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamps not strictly increasing at index {index}")]
    NotIncreasing {
        /// Position of the first timestamp that does not exceed its predecessor.
        index: usize,
    },

    /// Returned when the spacing between timestamps is not constant.
    #[error("irregular spacing at index {index}: expected step {expected}, found {found}")]
    IrregularSpacing {
        /// Position of the first irregular timestamp.
        index: usize,
        /// Step established by the first two timestamps.
        expected: i64,
        /// Step observed at `index`.
        found: i64,
    },

    /// Returned when a split point leaves one side empty.
    #[error("split point {at} out of range for series of length {len}")]
    SplitOutOfRange {
        /// Requested split point.
        at: usize,
        /// Length of the series.
        len: usize,
    },

    /// Returned when the series is shorter than an operation requires.
    #[error("series too short: got {n} observations, need at least {min}")]
    TooShort {
        /// Number of observations available.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },
}
