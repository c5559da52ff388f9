//! Evaluation error types.

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluateError {
    /// Returned when either input is empty.
    #[error("cannot evaluate empty inputs")]
    Empty,

    /// Returned when the inputs differ in length.
    #[error("length mismatch: {actual} actual values vs {forecast} forecast points")]
    LengthMismatch {
        /// Number of actual values.
        actual: usize,
        /// Number of forecast points.
        forecast: usize,
    },

    /// Returned when an input value is NaN or infinite.
    #[error("non-finite {which} value at index {index}")]
    NonFinite {
        /// `"actual"` or `"forecast"`.
        which: &'static str,
        /// Position of the first offending value.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = EvaluateError::LengthMismatch {
            actual: 3,
            forecast: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3 actual values"));
        assert!(msg.contains("2 forecast points"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = EvaluateError::NonFinite {
            which: "forecast",
            index: 4,
        };
        assert_eq!(format!("{}", err), "non-finite forecast value at index 4");
    }
}
