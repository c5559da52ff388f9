//! Differencing-order selection.

use tracing::{debug, warn};

use crate::adf::adf;
use crate::config::{StationarityConfig, UnitRootTest};
use crate::kpss::kpss;
use crate::seasonal::seasonal_strength;
use crate::{StationarityError, UnitRootOutcome};

fn unit_root(data: &[f64], config: &StationarityConfig) -> Result<UnitRootOutcome, StationarityError> {
    match config.test() {
        UnitRootTest::Kpss => kpss(data, config.significance()),
        UnitRootTest::Adf => adf(data, config.significance()),
    }
}

/// Chooses the regular differencing order `d ∈ 0..=max_d`.
///
/// The series is differenced `k = 0, 1, ..` times and the configured
/// unit-root test is run on each version; the first `k` accepted as
/// stationary is returned, or `max_d` if none is. A constant series is
/// stationary as it stands.
///
/// If a test cannot run, a warning is logged and `min(1, max_d)` is
/// returned.
#[tracing::instrument(skip(series, config), fields(n = series.len()))]
pub fn determine_d(series: &[f64], max_d: usize, config: &StationarityConfig) -> usize {
    let fallback = max_d.min(1);
    let mut x = series.to_vec();
    for k in 0..max_d {
        if augur_stats::is_constant(&x) {
            debug!(k, "series constant after differencing");
            return k;
        }
        match unit_root(&x, config) {
            Ok(outcome) => {
                debug!(
                    k,
                    statistic = outcome.statistic,
                    critical = outcome.critical_value,
                    stationary = outcome.stationary,
                    "unit-root test"
                );
                if outcome.stationary {
                    return k;
                }
            }
            Err(e) => {
                warn!(k, error = %e, fallback, "unit-root test failed, using default d");
                return fallback;
            }
        }
        x = augur_stats::difference(&x, 1);
    }
    max_d
}

/// Chooses the seasonal differencing order `D ∈ 0..=max_seasonal_d` for
/// period `m`.
///
/// Returns 0 without testing when `m ≤ 1` or the series has fewer than
/// `2·m` observations. Otherwise the series is seasonally differenced
/// `k = 0, 1, ..` times and its seasonal strength compared with the
/// configured threshold; the first `k` below it is returned. Differencing
/// stops early once the series would be shorter than `2·m`.
///
/// If the strength cannot be computed, a warning is logged and
/// `min(1, max_seasonal_d)` is returned.
#[tracing::instrument(skip(series, config), fields(n = series.len()))]
pub fn determine_seasonal_d(
    series: &[f64],
    m: usize,
    max_seasonal_d: usize,
    config: &StationarityConfig,
) -> usize {
    if m <= 1 || series.len() < 2 * m {
        return 0;
    }
    let fallback = max_seasonal_d.min(1);
    let mut x = series.to_vec();
    for k in 0..max_seasonal_d {
        if x.len() < 2 * m {
            debug!(k, len = x.len(), "series too short to test further");
            return k;
        }
        if augur_stats::is_constant(&x) {
            return k;
        }
        match seasonal_strength(&x, m) {
            Ok(strength) => {
                debug!(k, strength, threshold = config.seasonal_threshold(), "seasonal strength");
                if strength < config.seasonal_threshold() {
                    return k;
                }
            }
            Err(e) => {
                warn!(k, error = %e, fallback, "seasonal test failed, using default D");
                return fallback;
            }
        }
        x = augur_stats::seasonal_difference(&x, m, 1);
    }
    max_seasonal_d
}
