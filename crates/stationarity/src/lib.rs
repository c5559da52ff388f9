//! # augur-stationarity
//!
//! Chooses differencing orders for seasonal ARIMA models.
//!
//! - [`determine_d`] runs a unit-root test ([`UnitRootTest::Kpss`] by
//!   default, or [`UnitRootTest::Adf`]) on successively differenced
//!   versions of the series.
//! - [`determine_seasonal_d`] compares the seasonal strength of
//!   successively seasonally differenced versions with a threshold.
//!
//! Neither function fails: when a test cannot run, they log a warning and
//! fall back to one round of differencing (capped at the maximum).

mod adf;
mod config;
mod determine;
mod error;
mod kpss;
mod seasonal;

pub use adf::adf;
pub use config::{DEFAULT_SEASONAL_THRESHOLD, Significance, StationarityConfig, UnitRootTest};
pub use determine::{determine_d, determine_seasonal_d};
pub use error::StationarityError;
pub use kpss::kpss;
pub use seasonal::seasonal_strength;

/// Result of a unit-root test.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRootOutcome {
    /// Test statistic.
    pub statistic: f64,
    /// Critical value at the requested significance.
    pub critical_value: f64,
    /// Number of lags used (Newey–West truncation or augmentation lags).
    pub lags: usize,
    /// Whether the series is judged stationary.
    pub stationary: bool,
}
