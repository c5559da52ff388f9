use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Seed used when neither the config nor the command line sets one.
pub const DEFAULT_SEED: u64 = 42;

/// Top-level augur configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AugurConfig {
    /// Seed for the synthetic generator.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Input and hold-out settings.
    #[serde(default)]
    pub data: DataToml,

    /// Synthetic series settings, used when no input is given.
    #[serde(default)]
    pub synthetic: SyntheticToml,

    /// Order search settings.
    #[serde(default)]
    pub search: SearchToml,

    /// Stationarity test settings.
    #[serde(default)]
    pub stationarity: StationarityToml,

    /// Per-candidate optimiser settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Forecast settings.
    #[serde(default)]
    pub forecast: ForecastToml,
}

impl AugurConfig {
    /// Reads and parses a TOML file, or returns the defaults when `path` is
    /// `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            test_fraction: default_test_fraction(),
        }
    }
}

fn default_test_fraction() -> f64 {
    0.2
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntheticToml {
    #[serde(default = "default_n")]
    pub n: usize,
    #[serde(default = "default_trend_start")]
    pub trend_start: f64,
    #[serde(default = "default_trend_end")]
    pub trend_end: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_period")]
    pub period: usize,
    #[serde(default = "default_noise_sd")]
    pub noise_sd: f64,
}

impl Default for SyntheticToml {
    fn default() -> Self {
        Self {
            n: default_n(),
            trend_start: default_trend_start(),
            trend_end: default_trend_end(),
            amplitude: default_amplitude(),
            period: default_period(),
            noise_sd: default_noise_sd(),
        }
    }
}

fn default_n() -> usize {
    120
}
fn default_trend_start() -> f64 {
    10.0
}
fn default_trend_end() -> f64 {
    50.0
}
fn default_amplitude() -> f64 {
    10.0
}
fn default_period() -> usize {
    12
}
fn default_noise_sd() -> f64 {
    2.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_true")]
    pub seasonal: bool,
    #[serde(default = "default_period")]
    pub period: usize,
    #[serde(default = "default_max_order")]
    pub max_order: [usize; 2],
    #[serde(default = "default_max_seasonal_order")]
    pub max_seasonal_order: [usize; 2],
    #[serde(default = "default_max_d")]
    pub max_d: usize,
    #[serde(default = "default_max_seasonal_d")]
    pub max_seasonal_d: usize,
    /// Fixed `d`; automatic when absent.
    #[serde(default)]
    pub d: Option<usize>,
    /// Fixed `D`; automatic when absent.
    #[serde(default)]
    pub seasonal_d: Option<usize>,
    #[serde(default = "default_criterion")]
    pub criterion: String,
    #[serde(default = "default_true")]
    pub stepwise: bool,
    #[serde(default = "default_max_evaluations")]
    pub max_evaluations: usize,
    #[serde(default)]
    pub intercept: Option<bool>,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            seasonal: true,
            period: default_period(),
            max_order: default_max_order(),
            max_seasonal_order: default_max_seasonal_order(),
            max_d: default_max_d(),
            max_seasonal_d: default_max_seasonal_d(),
            d: None,
            seasonal_d: None,
            criterion: default_criterion(),
            stepwise: true,
            max_evaluations: default_max_evaluations(),
            intercept: None,
            parallel: true,
        }
    }
}

fn default_max_order() -> [usize; 2] {
    [5, 5]
}
fn default_max_seasonal_order() -> [usize; 2] {
    [2, 2]
}
fn default_max_d() -> usize {
    2
}
fn default_max_seasonal_d() -> usize {
    1
}
fn default_criterion() -> String {
    "aic".to_string()
}
fn default_max_evaluations() -> usize {
    augur_search::DEFAULT_MAX_EVALUATIONS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationarityToml {
    #[serde(default = "default_test")]
    pub test: String,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_seasonal_threshold")]
    pub seasonal_threshold: f64,
}

impl Default for StationarityToml {
    fn default() -> Self {
        Self {
            test: default_test(),
            alpha: default_alpha(),
            seasonal_threshold: default_seasonal_threshold(),
        }
    }
}

fn default_test() -> String {
    "kpss".to_string()
}
fn default_alpha() -> f64 {
    0.05
}
fn default_seasonal_threshold() -> f64 {
    augur_stationarity::DEFAULT_SEASONAL_THRESHOLD
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_sd_tolerance")]
    pub sd_tolerance: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            max_iters: default_max_iters(),
            sd_tolerance: default_sd_tolerance(),
        }
    }
}

fn default_max_iters() -> u64 {
    augur_arima::DEFAULT_MAX_ITERS
}
fn default_sd_tolerance() -> f64 {
    augur_arima::DEFAULT_SD_TOLERANCE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    /// Forecast horizon; defaults to the hold-out length.
    #[serde(default)]
    pub horizon: Option<usize>,
    #[serde(default = "default_level")]
    pub level: f64,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            horizon: None,
            level: default_level(),
        }
    }
}

fn default_level() -> f64 {
    augur_arima::DEFAULT_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: AugurConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.synthetic.n, 120);
        assert_eq!(cfg.search.period, 12);
        assert_eq!(cfg.search.max_order, [5, 5]);
        assert_eq!(cfg.search.criterion, "aic");
        assert!(cfg.search.stepwise);
        assert_eq!(cfg.stationarity.test, "kpss");
        assert!((cfg.data.test_fraction - 0.2).abs() < f64::EPSILON);
        assert!((cfg.forecast.level - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let cfg: AugurConfig = toml::from_str(
            r#"
            seed = 7

            [search]
            criterion = "bic"
            d = 1

            [fit]
            max_iters = 500
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.search.criterion, "bic");
        assert_eq!(cfg.search.d, Some(1));
        assert_eq!(cfg.search.seasonal_d, None);
        assert_eq!(cfg.search.max_seasonal_d, 1);
        assert_eq!(cfg.fit.max_iters, 500);
    }

    #[test]
    fn load_reads_file_or_defaults() {
        let cfg = AugurConfig::load(None).unwrap();
        assert_eq!(cfg.synthetic.period, 12);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("augur.toml");
        std::fs::write(&path, "[data]\ntest_fraction = 0.25\n").unwrap();
        let cfg = AugurConfig::load(Some(&path)).unwrap();
        assert!((cfg.data.test_fraction - 0.25).abs() < f64::EPSILON);

        assert!(AugurConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result: Result<AugurConfig, _> = toml::from_str("[search]\nmax_x = 3\n");
        assert!(result.is_err());
    }
}
