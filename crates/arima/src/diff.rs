//! Differencing and its inverse.
//!
//! **Not part of the public API.**

/// Record of the differencing applied to a series, sufficient to integrate
/// forecasts back to the original scale.
///
/// Each stage stores its lag and the last `lag` values of the series it was
/// applied to.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Differencing {
    stages: Vec<(usize, Vec<f64>)>,
}

impl Differencing {
    /// Applies `seasonal_d` seasonal differences at lag `period`, then `d`
    /// regular ones. Returns the differenced series with its record, or
    /// `None` when the series is exhausted.
    pub(crate) fn apply(
        data: &[f64],
        d: usize,
        seasonal_d: usize,
        period: usize,
    ) -> Option<(Vec<f64>, Self)> {
        let lags = std::iter::repeat_n(period, seasonal_d).chain(std::iter::repeat_n(1, d));
        let mut current = data.to_vec();
        let mut stages = Vec::new();
        for lag in lags {
            if lag == 0 || current.len() <= lag {
                return None;
            }
            let tail = current[current.len() - lag..].to_vec();
            current = augur_stats::seasonal_difference(&current, lag, 1);
            stages.push((lag, tail));
        }
        Some((current, Self { stages }))
    }

    /// Integrates forecasts of the differenced series back to the original
    /// scale, undoing the regular differences first and the seasonal ones
    /// last.
    pub(crate) fn integrate(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut out = forecasts.to_vec();
        for (lag, tail) in self.stages.iter().rev() {
            let mut history = tail.clone();
            for value in out.iter_mut() {
                let base = history[history.len() - lag];
                *value += base;
                history.push(*value);
            }
        }
        out
    }
}
