//! Run command: search, forecast the hold-out and evaluate.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use augur_evaluate::evaluate;
use augur_search::{TimeSeries, forecast, search_with_report};

use crate::cli::RunArgs;
use crate::config::{AugurConfig, DEFAULT_SEED};
use crate::report::{RunReport, RunSummary};
use crate::{convert, input, synthetic};

/// Run the full search-forecast-evaluate pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    let config = AugurConfig::load(args.config.as_deref())?;
    let search_cfg = convert::build_search_config(&config)?;

    // 1. Load or generate the series
    let series = load_series(&args, &config)?;
    let (train, test) = split_holdout(&series, config.data.test_fraction)?;
    let test_values = test.as_ref().map_or(&[][..], |t| t.values());
    println!("Data: {} total points.", series.len());
    println!(
        "Training samples: {}, Testing samples: {}",
        train.len(),
        test_values.len()
    );

    // 2. Search
    println!("Running order search...");
    let report = search_with_report(&train, &search_cfg).context("order search failed")?;
    let best = report.best();
    println!(
        "Best model: {} {}={:.3} ({} candidates evaluated)",
        best.order(),
        report.criterion(),
        best.criterion(),
        report.evaluated().len()
    );

    // 3. Forecast
    let horizon = match args.horizon.or(config.forecast.horizon) {
        Some(h) => h,
        None if !test_values.is_empty() => test_values.len(),
        None => bail!("no hold-out: set [forecast].horizon or use --horizon"),
    };
    let fc = forecast(best, horizon, config.forecast.level).context("forecast failed")?;
    info!(horizon, level = fc.level(), "forecast complete");

    // 4. Evaluate against the hold-out
    let k = horizon.min(test_values.len());
    let actual = &test_values[..k];
    let (rmse, naive_rmse) = if k > 0 {
        let means = fc.means();
        let naive = vec![augur_stats::mean(train.values()); k];
        let rmse = evaluate(actual, &means[..k]).context("evaluating forecast")?;
        let naive_rmse = evaluate(actual, &naive).context("evaluating naive forecast")?;
        println!("Model RMSE: {:.4}", rmse.value());
        println!("Naive mean RMSE: {:.4}", naive_rmse.value());
        (Some(rmse), Some(naive_rmse))
    } else {
        (None, None)
    };

    // 5. Report
    if let Some(path) = args.output.or(config.data.output) {
        let timestamps = train.next_timestamps(horizon);
        let run_report = RunReport::build(RunSummary {
            search: &report,
            forecast: &fc,
            timestamps: &timestamps,
            actual,
            n_train: train.len(),
            rmse,
            naive_rmse,
        })?;
        run_report.write(&path)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn load_series(args: &RunArgs, config: &AugurConfig) -> Result<TimeSeries> {
    if let Some(path) = args.input.as_ref().or(config.data.input.as_ref()) {
        info!(path = %path.display(), "reading series");
        return input::read_series(path);
    }
    let seed = args.seed.or(config.seed).unwrap_or(DEFAULT_SEED);
    info!(seed, "generating synthetic series");
    synthetic::generate_series(&convert::build_synthetic_spec(&config.synthetic), seed)
}

/// Holds out the last `round(n · fraction)` observations.
fn split_holdout(series: &TimeSeries, fraction: f64) -> Result<(TimeSeries, Option<TimeSeries>)> {
    if fraction.is_nan() || !(0.0..1.0).contains(&fraction) {
        bail!("test_fraction must be in [0, 1), got {fraction}");
    }
    let n_test = (series.len() as f64 * fraction).round() as usize;
    if n_test == 0 {
        return Ok((series.clone(), None));
    }
    let (train, test) = series
        .split_at(series.len().saturating_sub(n_test))
        .context("hold-out leaves no training data")?;
    Ok((train, Some(test)))
}
