//! # augur-series
//!
//! A univariate, evenly spaced time series. Timestamps are integer ticks
//! whose unit (months, days, seconds) is chosen by the caller; the only
//! requirement is a constant step with no gaps.

mod error;

pub use error::SeriesError;

/// Ordered `(timestamp, value)` observations with a uniform step.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a series after validating it.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::Empty`] if there are no observations.
    /// - [`SeriesError::LengthMismatch`] if the two vectors differ in length.
    /// - [`SeriesError::NonFinite`] if any value is NaN or infinite.
    /// - [`SeriesError::NotIncreasing`] if timestamps do not strictly increase.
    /// - [`SeriesError::IrregularSpacing`] if the step is not constant.
    pub fn new(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        if values.is_empty() {
            return Err(SeriesError::Empty);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SeriesError::NonFinite { index });
        }

        if timestamps.len() >= 2 {
            let expected = timestamps[1] - timestamps[0];
            for (i, w) in timestamps.windows(2).enumerate() {
                let found = w[1] - w[0];
                if found <= 0 {
                    return Err(SeriesError::NotIncreasing { index: i + 1 });
                }
                if found != expected {
                    return Err(SeriesError::IrregularSpacing {
                        index: i + 1,
                        expected,
                        found,
                    });
                }
            }
        }

        Ok(Self { timestamps, values })
    }

    /// Creates a series with timestamps `0, 1, .., n-1`.
    ///
    /// # Errors
    ///
    /// Same as [`TimeSeries::new`], minus the timestamp checks.
    pub fn from_values(values: Vec<f64>) -> Result<Self, SeriesError> {
        let timestamps = (0..values.len() as i64).collect();
        Self::new(timestamps, values)
    }

    /// Returns the observed values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the timestamps.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validated series; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the spacing between consecutive timestamps (1 for a
    /// single-observation series).
    pub fn step(&self) -> i64 {
        match self.timestamps.as_slice() {
            [first, second, ..] => second - first,
            _ => 1,
        }
    }

    /// Splits into `(train, test)` where `train` holds the first `at`
    /// observations.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::SplitOutOfRange`] unless `0 < at < len`.
    pub fn split_at(&self, at: usize) -> Result<(TimeSeries, TimeSeries), SeriesError> {
        if at == 0 || at >= self.len() {
            return Err(SeriesError::SplitOutOfRange { at, len: self.len() });
        }
        let train = TimeSeries {
            timestamps: self.timestamps[..at].to_vec(),
            values: self.values[..at].to_vec(),
        };
        let test = TimeSeries {
            timestamps: self.timestamps[at..].to_vec(),
            values: self.values[at..].to_vec(),
        };
        Ok((train, test))
    }

    /// Returns the `horizon` timestamps that follow the last observation.
    pub fn next_timestamps(&self, horizon: usize) -> Vec<i64> {
        let step = self.step();
        let last = self.timestamps.last().copied().unwrap_or(0);
        (1..=horizon as i64).map(|h| last + h * step).collect()
    }

    /// Returns an error unless the series has at least `min` observations.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::TooShort`].
    pub fn require_len(&self, min: usize) -> Result<(), SeriesError> {
        if self.len() < min {
            return Err(SeriesError::TooShort { n: self.len(), min });
        }
        Ok(())
    }
}
