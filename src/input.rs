//! JSON series files.
//!
//! Accepted layouts: `{"timestamps": [...], "values": [...]}` (timestamps
//! optional) or a bare array of numbers.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use augur_series::TimeSeries;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeriesJson {
    Object {
        #[serde(default)]
        timestamps: Option<Vec<i64>>,
        values: Vec<f64>,
    },
    Bare(Vec<f64>),
}

#[derive(Serialize)]
struct SeriesOut<'a> {
    timestamps: &'a [i64],
    values: &'a [f64],
}

/// Parses a series from JSON text.
pub fn parse_series(json: &str) -> Result<TimeSeries> {
    let parsed: SeriesJson = serde_json::from_str(json).context("invalid series JSON")?;
    let series = match parsed {
        SeriesJson::Object {
            timestamps: Some(timestamps),
            values,
        } => TimeSeries::new(timestamps, values),
        SeriesJson::Object {
            timestamps: None,
            values,
        }
        | SeriesJson::Bare(values) => TimeSeries::from_values(values),
    };
    series.context("invalid series")
}

/// Reads a series from a JSON file.
pub fn read_series(path: &Path) -> Result<TimeSeries> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;
    parse_series(&text).with_context(|| format!("in {}", path.display()))
}

/// Writes a series as a JSON object with timestamps and values.
pub fn write_series(path: &Path, series: &TimeSeries) -> Result<()> {
    let out = SeriesOut {
        timestamps: series.timestamps(),
        values: series.values(),
    };
    let json = serde_json::to_string_pretty(&out).context("failed to serialise series")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write series file: {}", path.display()))
}
