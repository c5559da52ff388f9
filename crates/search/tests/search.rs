//! End-to-end behaviour of the order search.

use std::collections::BTreeSet;

use augur_search::{
    Criterion, DEFAULT_LEVEL, Differencing, OrderSpec, SearchConfig, SearchError, TimeSeries, forecast, search,
    search_with_report,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// 120 monthly points: trend 10 → 50, amplitude-10 sine of period 12,
/// N(0, 2²) noise.
fn seasonal_series(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 2.0).unwrap();
    let n = 120;
    (0..n)
        .map(|t| {
            let trend = 10.0 + 40.0 * t as f64 / (n - 1) as f64;
            let season = 10.0 * (2.0 * std::f64::consts::PI * t as f64 / 12.0).sin();
            trend + season + noise.sample(&mut rng)
        })
        .collect()
}

fn arma_series(n: usize, phi: f64, theta: f64, seed: u64) -> TimeSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut prev_x = 0.0;
    let mut prev_e = 0.0;
    let values = (0..n)
        .map(|_| {
            let e = normal.sample(&mut rng);
            let x = phi * prev_x + e + theta * prev_e;
            prev_x = x;
            prev_e = e;
            x
        })
        .collect();
    TimeSeries::from_values(values).unwrap()
}

fn small_config() -> SearchConfig {
    SearchConfig::new()
        .with_max_order(2, 2)
        .with_d(Differencing::Fixed(0))
}

#[test]
fn stepwise_search_is_deterministic() {
    let series = arma_series(150, 0.6, 0.3, 11);
    let config = small_config();
    let a = search_with_report(&series, &config).unwrap();
    let b = search_with_report(&series, &config).unwrap();

    assert_eq!(a.best().order(), b.best().order());
    let path_a: Vec<OrderSpec> = a.evaluated().iter().map(|c| c.order()).collect();
    let path_b: Vec<OrderSpec> = b.evaluated().iter().map(|c| c.order()).collect();
    assert_eq!(path_a, path_b);
}

#[test]
fn parallel_and_sequential_agree() {
    let series = arma_series(150, 0.5, -0.4, 12);
    let par = search_with_report(&series, &small_config()).unwrap();
    let seq = search_with_report(&series, &small_config().with_parallel(false)).unwrap();
    assert_eq!(par.best().order(), seq.best().order());
    assert_eq!(par.evaluated().len(), seq.evaluated().len());
}

#[test]
fn stepwise_never_refits_an_order() {
    let series = arma_series(150, 0.7, 0.0, 13);
    let report = search_with_report(&series, &small_config()).unwrap();
    let unique: BTreeSet<OrderSpec> = report.evaluated().iter().map(|c| c.order()).collect();
    assert_eq!(unique.len(), report.evaluated().len());
}

#[test]
fn selected_model_is_valid_and_best_of_trace() {
    let series = arma_series(150, 0.6, 0.3, 14);
    let report = search_with_report(&series, &small_config()).unwrap();
    let best = report.best();
    assert!(best.is_valid());
    assert!(best.criterion().is_finite());
    for c in report.evaluated().iter().filter(|c| c.is_valid()) {
        assert!(best.criterion() <= c.criterion() + 1e-6, "{} beats {}", c.order(), best.order());
    }
}

#[test]
fn exhaustive_search_visits_the_full_grid() {
    let series = arma_series(120, 0.5, 0.0, 15);
    let config = SearchConfig::new()
        .with_max_order(1, 2)
        .with_d(Differencing::Fixed(0))
        .with_stepwise(false);
    let report = search_with_report(&series, &config).unwrap();

    let visited: BTreeSet<OrderSpec> = report.evaluated().iter().map(|c| c.order()).collect();
    let expected: BTreeSet<OrderSpec> = (0..=1)
        .flat_map(|p| (0..=2).map(move |q| OrderSpec::new(p, 0, q)))
        .collect();
    assert_eq!(report.evaluated().len(), 6);
    assert_eq!(visited, expected);
}

#[test]
fn exhaustive_is_at_least_as_good_as_stepwise() {
    let series = arma_series(150, 0.4, 0.5, 16);
    let stepwise = search(&series, &small_config()).unwrap();
    let exhaustive = search(&series, &small_config().with_stepwise(false)).unwrap();
    assert!(exhaustive.criterion() <= stepwise.criterion() + 1e-6);
}

#[test]
fn exhaustive_respects_budget() {
    let series = arma_series(120, 0.5, 0.0, 17);
    let config = small_config().with_stepwise(false).with_max_evaluations(5);
    let report = search_with_report(&series, &config).unwrap();
    assert_eq!(report.evaluated().len(), 5);
}

#[test]
fn constant_series_exhausts_the_search() {
    let series = TimeSeries::from_values(vec![4.2; 40]).unwrap();
    let err = search(&series, &SearchConfig::new()).unwrap_err();
    assert_eq!(err, SearchError::Exhausted { evaluated: 4 });
}

#[test]
fn null_only_grid_on_constant_series_exhausts() {
    let series = TimeSeries::from_values(vec![1.0; 30]).unwrap();
    let config = SearchConfig::new()
        .with_max_order(0, 0)
        .with_max_seasonal_order(0, 0);
    let err = search(&series, &config).unwrap_err();
    assert_eq!(err, SearchError::Exhausted { evaluated: 1 });
}

#[test]
fn criterion_choice_is_reported_and_applied() {
    let series = arma_series(200, 0.6, 0.0, 18);
    let report = search_with_report(&series, &small_config().with_criterion(Criterion::Bic)).unwrap();
    assert_eq!(report.criterion(), Criterion::Bic);
    let fit = report.best().fit().unwrap();
    assert_eq!(report.best().criterion(), fit.bic());
}

#[test]
fn interval_width_grows_with_horizon() {
    let series = arma_series(150, 0.6, 0.3, 19);
    let best = search(&series, &small_config()).unwrap();
    let fc = forecast(&best, 12, DEFAULT_LEVEL).unwrap();
    let widths: Vec<f64> = fc.points().iter().map(|p| p.upper - p.lower).collect();
    for w in widths.windows(2) {
        assert!(w[1] >= w[0] - 1e-9, "widths not monotone: {widths:?}");
    }
}

#[test]
fn one_step_forecast_has_one_point() {
    let series = arma_series(150, 0.6, 0.3, 20);
    let best = search(&series, &small_config()).unwrap();
    let fc = forecast(&best, 1, DEFAULT_LEVEL).unwrap();
    assert_eq!(fc.horizon(), 1);
    let point = fc.points()[0];
    assert!(point.lower < point.mean && point.mean < point.upper);
}

#[test]
fn seasonal_series_beats_naive_mean() {
    let values = seasonal_series(42);
    let series = TimeSeries::from_values(values).unwrap();
    let (train, test) = series.split_at(96).unwrap();

    let config = SearchConfig::new()
        .with_period(12)
        .with_max_order(3, 3)
        .with_max_seasonal_order(3, 3);
    let report = search_with_report(&train, &config).unwrap();
    assert!(report.evaluated().len() <= config.max_evaluations());
    let best = report.best();
    assert!(best.order().is_seasonal(), "selected {}", best.order());

    let fc = forecast(best, test.len(), DEFAULT_LEVEL).unwrap();
    let model = augur_evaluate::evaluate(test.values(), &fc.means()).unwrap();

    let train_mean = train.values().iter().sum::<f64>() / train.len() as f64;
    let naive = augur_evaluate::evaluate(test.values(), &vec![train_mean; test.len()]).unwrap();

    assert!(
        model.value() < naive.value(),
        "model RMSE {} vs naive {}",
        model.value(),
        naive.value()
    );
}
