//! Error metrics and their result type.

use serde::Serialize;

/// Forecast error metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Root-mean-squared error.
    #[default]
    Rmse,
    /// Mean absolute error.
    Mae,
}

impl Metric {
    /// Computes the metric over paired values. Callers guarantee equal,
    /// non-zero lengths.
    pub(crate) fn compute(self, actual: &[f64], forecast: &[f64]) -> f64 {
        let n = actual.len() as f64;
        let errors = actual.iter().zip(forecast).map(|(a, f)| a - f);
        match self {
            Self::Rmse => (errors.map(|e| e * e).sum::<f64>() / n).sqrt(),
            Self::Mae => errors.map(f64::abs).sum::<f64>() / n,
        }
    }
}

/// A scalar forecast error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    metric: Metric,
    value: f64,
    n: usize,
}

impl EvaluationResult {
    pub(crate) fn new(metric: Metric, value: f64, n: usize) -> Self {
        Self { metric, value, n }
    }

    /// Returns the metric used.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the error value (non-negative).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the number of compared points.
    pub fn n(&self) -> usize {
        self.n
    }
}
