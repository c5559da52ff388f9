//! JSON run report.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use augur_arima::{Forecast, OrderSpec, SarimaFit};
use augur_evaluate::EvaluationResult;
use augur_search::SearchReport;

/// Selected order, flattened for serialisation.
#[derive(Debug, Serialize, PartialEq)]
pub struct OrderJson {
    pub p: usize,
    pub d: usize,
    pub q: usize,
    #[serde(rename = "P")]
    pub seasonal_p: usize,
    #[serde(rename = "D")]
    pub seasonal_d: usize,
    #[serde(rename = "Q")]
    pub seasonal_q: usize,
    pub m: usize,
}

impl From<OrderSpec> for OrderJson {
    fn from(o: OrderSpec) -> Self {
        Self {
            p: o.p(),
            d: o.d(),
            q: o.q(),
            seasonal_p: o.seasonal_p(),
            seasonal_d: o.seasonal_d(),
            seasonal_q: o.seasonal_q(),
            m: o.period(),
        }
    }
}

/// Estimated coefficients of each polynomial block.
#[derive(Debug, Serialize, PartialEq)]
pub struct CoefficientsJson {
    pub ar: Vec<f64>,
    pub ma: Vec<f64>,
    pub seasonal_ar: Vec<f64>,
    pub seasonal_ma: Vec<f64>,
}

impl From<&SarimaFit> for CoefficientsJson {
    fn from(fit: &SarimaFit) -> Self {
        Self {
            ar: fit.ar().to_vec(),
            ma: fit.ma().to_vec(),
            seasonal_ar: fit.seasonal_ar().to_vec(),
            seasonal_ma: fit.seasonal_ma().to_vec(),
        }
    }
}

/// One forecast step, with the held-out value when there is one.
#[derive(Debug, Serialize)]
pub struct ForecastRow {
    pub timestamp: i64,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
    pub actual: Option<f64>,
}

/// Everything `augur run` produces.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub model: String,
    pub order: OrderJson,
    pub criterion: String,
    pub criterion_value: f64,
    pub coefficients: CoefficientsJson,
    pub intercept: Option<f64>,
    pub sigma2: f64,
    pub log_likelihood: f64,
    pub evaluated: usize,
    pub n_train: usize,
    pub n_test: usize,
    pub level: f64,
    pub forecast: Vec<ForecastRow>,
    pub rmse: Option<EvaluationResult>,
    pub naive_rmse: Option<EvaluationResult>,
}

/// Inputs for [`RunReport::build`].
pub struct RunSummary<'a> {
    pub search: &'a SearchReport,
    pub forecast: &'a Forecast,
    pub timestamps: &'a [i64],
    pub actual: &'a [f64],
    pub n_train: usize,
    pub rmse: Option<EvaluationResult>,
    pub naive_rmse: Option<EvaluationResult>,
}

impl RunReport {
    pub fn build(summary: RunSummary<'_>) -> Result<Self> {
        let best = summary.search.best();
        let fit = best
            .fit()
            .context("selected candidate carries no fitted model")?;
        let forecast = summary
            .forecast
            .points()
            .iter()
            .zip(summary.timestamps)
            .enumerate()
            .map(|(i, (p, &timestamp))| ForecastRow {
                timestamp,
                mean: p.mean,
                lower: p.lower,
                upper: p.upper,
                actual: summary.actual.get(i).copied(),
            })
            .collect();

        Ok(Self {
            model: best.order().to_string(),
            order: best.order().into(),
            criterion: summary.search.criterion().to_string(),
            criterion_value: best.criterion(),
            coefficients: fit.into(),
            intercept: fit.intercept(),
            sigma2: fit.sigma2(),
            log_likelihood: fit.log_likelihood(),
            evaluated: summary.search.evaluated().len(),
            n_train: summary.n_train,
            n_test: summary.actual.len(),
            level: summary.forecast.level(),
            forecast,
            rmse: summary.rmse,
            naive_rmse: summary.naive_rmse,
        })
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialise report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))
    }
}
