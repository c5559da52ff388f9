//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use augur_arima::FitOptions;
use augur_search::{Criterion, Differencing, SearchConfig};
use augur_stationarity::{Significance, StationarityConfig, UnitRootTest};

use crate::config::*;
use crate::synthetic::SyntheticSpec;

/// Parses an information criterion name.
pub fn parse_criterion(s: &str) -> Result<Criterion> {
    match s.to_lowercase().as_str() {
        "aic" => Ok(Criterion::Aic),
        "aicc" => Ok(Criterion::Aicc),
        "bic" => Ok(Criterion::Bic),
        other => bail!("unknown criterion: {other:?}"),
    }
}

/// Parses a unit-root test name.
pub fn parse_unit_root_test(s: &str) -> Result<UnitRootTest> {
    match s.to_lowercase().as_str() {
        "kpss" => Ok(UnitRootTest::Kpss),
        "adf" => Ok(UnitRootTest::Adf),
        other => bail!("unknown unit-root test: {other:?}"),
    }
}

/// Maps a significance level to one of the tabulated levels.
pub fn parse_significance(alpha: f64) -> Result<Significance> {
    match Significance::from_alpha(alpha) {
        Some(s) => Ok(s),
        None => bail!("alpha must be 0.01, 0.05 or 0.1, got {alpha}"),
    }
}

fn differencing(fixed: Option<usize>) -> Differencing {
    fixed.map_or(Differencing::Auto, Differencing::Fixed)
}

/// Builds a [`StationarityConfig`] from the TOML stationarity section.
pub fn build_stationarity_config(st: &StationarityToml) -> Result<StationarityConfig> {
    let cfg = StationarityConfig::new()
        .with_test(parse_unit_root_test(&st.test)?)
        .with_significance(parse_significance(st.alpha)?)
        .with_seasonal_threshold(st.seasonal_threshold);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds [`FitOptions`] from the TOML fit section.
pub fn build_fit_options(fit: &FitToml) -> FitOptions {
    FitOptions::new()
        .with_max_iters(fit.max_iters)
        .with_sd_tolerance(fit.sd_tolerance)
}

/// Builds a validated [`SearchConfig`] from the TOML configuration.
pub fn build_search_config(config: &AugurConfig) -> Result<SearchConfig> {
    let s = &config.search;
    let cfg = SearchConfig::new()
        .with_seasonal(s.seasonal)
        .with_period(s.period)
        .with_max_order(s.max_order[0], s.max_order[1])
        .with_max_seasonal_order(s.max_seasonal_order[0], s.max_seasonal_order[1])
        .with_max_differencing(s.max_d, s.max_seasonal_d)
        .with_d(differencing(s.d))
        .with_seasonal_d(differencing(s.seasonal_d))
        .with_criterion(parse_criterion(&s.criterion)?)
        .with_stepwise(s.stepwise)
        .with_max_evaluations(s.max_evaluations)
        .with_intercept(s.intercept)
        .with_parallel(s.parallel)
        .with_stationarity(build_stationarity_config(&config.stationarity)?)
        .with_fit_options(build_fit_options(&config.fit));
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`SyntheticSpec`] from the TOML synthetic section.
pub fn build_synthetic_spec(syn: &SyntheticToml) -> SyntheticSpec {
    SyntheticSpec {
        n: syn.n,
        trend_start: syn.trend_start,
        trend_end: syn.trend_end,
        amplitude: syn.amplitude,
        period: syn.period,
        noise_sd: syn.noise_sd,
    }
}
