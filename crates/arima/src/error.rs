//! Error types for the augur-arima crate.

/// Reasons a single seasonal ARIMA fit can fail.
///
/// These are local to one candidate order: a search records them and moves
/// on to the next candidate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArimaError {
    /// Returned when the input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the input data has fewer observations than required.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the differenced series has zero variance.
    #[error("differenced data is constant (zero variance)")]
    ConstantData,

    /// Returned when the fitted AR operator is on the stationarity boundary.
    #[error("fitted model is non-stationary")]
    NonStationary,

    /// Returned when the fitted MA operator is on the invertibility boundary.
    #[error("fitted model is non-invertible")]
    NonInvertible,

    /// Returned when an innovation or prediction variance is non-finite or
    /// non-positive.
    #[error("singular covariance in state-space filter")]
    SingularCovariance,

    /// Returned when the optimiser fails or exhausts its iteration budget.
    #[error("optimisation failed to converge")]
    OptimizationFailed,

    /// Returned when the order itself is malformed.
    #[error("invalid order: {reason}")]
    InvalidOrder {
        /// What is wrong with the order.
        reason: String,
    },
}

/// Reasons a forecast cannot be produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Returned when the horizon is zero.
    #[error("forecast horizon must be at least 1, got {horizon}")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: usize,
    },

    /// Returned when the interval level is not in `(0, 1)`.
    #[error("interval level must be in (0, 1), got {level}")]
    InvalidLevel {
        /// The rejected level.
        level: f64,
    },

    /// Returned when forecasting from a candidate whose fit failed.
    #[error("cannot forecast from a failed fit")]
    InvalidModel(#[source] ArimaError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_insufficient_data() {
        let err = ArimaError::InsufficientData { n: 5, min: 10 };
        assert_eq!(
            err.to_string(),
            "insufficient data: got 5 observations, need at least 10"
        );
    }

    #[test]
    fn error_constant_data() {
        assert_eq!(
            ArimaError::ConstantData.to_string(),
            "differenced data is constant (zero variance)"
        );
    }

    #[test]
    fn error_non_invertible() {
        assert_eq!(
            ArimaError::NonInvertible.to_string(),
            "fitted model is non-invertible"
        );
    }

    #[test]
    fn error_invalid_order() {
        let err = ArimaError::InvalidOrder {
            reason: "period must be at least 1".into(),
        };
        assert_eq!(err.to_string(), "invalid order: period must be at least 1");
    }

    #[test]
    fn forecast_error_messages() {
        assert_eq!(
            ForecastError::InvalidHorizon { horizon: 0 }.to_string(),
            "forecast horizon must be at least 1, got 0"
        );
        assert_eq!(
            ForecastError::InvalidLevel { level: 1.5 }.to_string(),
            "interval level must be in (0, 1), got 1.5"
        );
    }

    #[test]
    fn invalid_model_keeps_source() {
        use std::error::Error;
        let err = ForecastError::InvalidModel(ArimaError::NonStationary);
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("fitted model is non-stationary".to_string())
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ArimaError>();
        assert_impl::<ForecastError>();
    }
}
