//! Forecast accuracy against held-out observations.

mod error;
mod metric;

pub use error::EvaluateError;
pub use metric::{EvaluationResult, Metric};

/// Root-mean-squared error of `forecast` against `actual`.
///
/// # Errors
///
/// See [`evaluate_with`].
pub fn evaluate(actual: &[f64], forecast: &[f64]) -> Result<EvaluationResult, EvaluateError> {
    evaluate_with(actual, forecast, Metric::Rmse)
}

/// Computes `metric` of `forecast` against `actual`.
///
/// # Errors
///
/// Returns [`EvaluateError::Empty`] if either input is empty,
/// [`EvaluateError::LengthMismatch`] if their lengths differ and
/// [`EvaluateError::NonFinite`] if any value is NaN or infinite.
pub fn evaluate_with(
    actual: &[f64],
    forecast: &[f64],
    metric: Metric,
) -> Result<EvaluationResult, EvaluateError> {
    if actual.is_empty() || forecast.is_empty() {
        return Err(EvaluateError::Empty);
    }
    if actual.len() != forecast.len() {
        return Err(EvaluateError::LengthMismatch {
            actual: actual.len(),
            forecast: forecast.len(),
        });
    }
    for (which, values) in [("actual", actual), ("forecast", forecast)] {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(EvaluateError::NonFinite { which, index });
        }
    }
    Ok(EvaluationResult::new(
        metric,
        metric.compute(actual, forecast),
        actual.len(),
    ))
}
