//! # augur-arima
//!
//! Seasonal ARIMA(p,d,q)(P,D,Q)[m] fitting via state-space
//! maximum-likelihood (Kalman filter), and horizon forecasting with
//! prediction intervals.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["OrderSpec::new(p, d, q).with_seasonal(P, D, Q, m)"] -->|".fit(&data, &FitOptions)?"| B["SarimaFit"]
//!     B --> C[".ar() / .ma() / .seasonal_ar() / .seasonal_ma()"]
//!     B --> D[".aic() / .aicc() / .bic()"]
//!     B -->|".forecast(h, level)?"| E["Forecast"]
//! ```
//!
//! ```ignore
//! let order = OrderSpec::new(1, 0, 1).with_seasonal(0, 1, 1, 12);
//! let fit = order.fit(&data, &FitOptions::default())?;
//! let forecast = fit.forecast(24, DEFAULT_LEVEL)?;
//! ```
//!
//! ## Estimation
//!
//! The series is differenced (`D` seasonal differences at lag `m`, then `d`
//! regular ones) and, when an intercept is included, centred on its mean.
//! Each coefficient block is parametrised through partial
//! autocorrelations so every trial model is stationary and invertible; the
//! multiplicative seasonal polynomials are expanded and cast in state-space
//! form, and the concentrated Gaussian likelihood is maximised with
//! Nelder–Mead.
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`SarimaFit::ar()`] | AR coefficients: weights on past observations |
//! | theta | [`SarimaFit::ma()`] | MA coefficients: weights on past forecast errors |
//! | Phi, Theta | [`SarimaFit::seasonal_ar()`], [`SarimaFit::seasonal_ma()`] | Same at multiples of the period |
//! | mu | [`SarimaFit::intercept()`] | Mean of the differenced series |
//! | sigma2 | [`SarimaFit::sigma2()`] | Innovation (white-noise) variance |
//! | AIC | [`SarimaFit::aic()`] | Akaike Information Criterion (lower = better) |

mod error;
mod fit;
mod forecast;
mod options;
mod order;

pub(crate) mod diff;
pub(crate) mod kalman;
pub(crate) mod optimizer;
pub(crate) mod params;
pub(crate) mod poly;
pub(crate) mod state_space;

pub use error::{ArimaError, ForecastError};
pub use fit::SarimaFit;
pub use forecast::{DEFAULT_LEVEL, Forecast, ForecastPoint};
pub use options::{DEFAULT_MAX_ITERS, DEFAULT_SD_TOLERANCE, FitOptions};
pub use order::OrderSpec;
