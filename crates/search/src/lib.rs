//! # augur-search
//!
//! Automatic seasonal ARIMA order selection.
//!
//! [`search`] resolves the differencing orders with
//! [`augur_stationarity`], then explores `(p, q, P, Q)` either stepwise
//! (local moves of ±1 from the current best) or over the full grid,
//! fitting each candidate with [`augur_arima`] and ranking them by an
//! information [`Criterion`].
//!
//! ```no_run
//! use augur_search::{SearchConfig, TimeSeries, forecast, search};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let series = TimeSeries::from_values((0..120).map(|i| (i % 12) as f64).collect())?;
//! let config = SearchConfig::new().with_period(12);
//! let best = search(&series, &config)?;
//! let fc = forecast(&best, 24, 0.95)?;
//! println!("{}: {:?}", best.order(), fc.means());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! search_with_report()
//!   ├─ SearchConfig::validate()            (config.rs)
//!   ├─ determine_seasonal_d / determine_d  (augur-stationarity)
//!   ├─ initial_frontier / neighbours       (stepwise.rs)
//!   ├─ evaluate_round()                    rayon fits, then single-writer merge
//!   │    └─ SearchState::record()          (state.rs)
//!   └─ SearchReport
//! ```
//!
//! A candidate that fails to fit is recorded as
//! [`FitOutcome::Invalid`] and never selected; the search only fails as a
//! whole with [`SearchError::Exhausted`] when no candidate fits.

mod candidate;
mod config;
mod error;
mod search;

pub(crate) mod state;
pub(crate) mod stepwise;

pub use candidate::{CandidateModel, FitOutcome, forecast};
pub use config::{Criterion, DEFAULT_MAX_EVALUATIONS, Differencing, SearchConfig};
pub use error::SearchError;
pub use search::{SearchReport, search, search_with_report};

pub use augur_arima::{
    ArimaError, DEFAULT_LEVEL, FitOptions, Forecast, ForecastError, ForecastPoint, OrderSpec, SarimaFit,
};
pub use augur_series::{SeriesError, TimeSeries};
pub use augur_stationarity::{Significance, StationarityConfig, UnitRootTest};
