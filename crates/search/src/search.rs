//! Stepwise and exhaustive order search.

use std::time::Instant;

use augur_arima::{FitOptions, OrderSpec};
use augur_series::TimeSeries;
use augur_stationarity::{determine_d, determine_seasonal_d};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::candidate::{CandidateModel, FitOutcome};
use crate::config::{Criterion, Differencing, SearchConfig};
use crate::error::SearchError;
use crate::state::SearchState;
use crate::stepwise::{OrderBounds, grid, initial_frontier, neighbours};

/// Outcome of [`search_with_report`]: the selected model and every
/// candidate evaluated on the way, in evaluation order.
#[derive(Debug, Clone)]
pub struct SearchReport {
    best: CandidateModel,
    evaluated: Vec<CandidateModel>,
    d: usize,
    seasonal_d: usize,
    criterion: Criterion,
}

impl SearchReport {
    /// Returns the selected model.
    pub fn best(&self) -> &CandidateModel {
        &self.best
    }

    /// Consumes the report and returns the selected model.
    pub fn into_best(self) -> CandidateModel {
        self.best
    }

    /// Every evaluated candidate, valid or not, in evaluation order.
    pub fn evaluated(&self) -> &[CandidateModel] {
        &self.evaluated
    }

    /// Regular differencing order used by every candidate.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Seasonal differencing order used by every candidate.
    pub fn seasonal_d(&self) -> usize {
        self.seasonal_d
    }

    /// Criterion the candidates were ranked by.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }
}

/// Selects and fits the best seasonal ARIMA order for `series`.
///
/// Shorthand for [`search_with_report`] keeping only the selected model.
///
/// # Errors
///
/// See [`search_with_report`].
pub fn search(series: &TimeSeries, config: &SearchConfig) -> Result<CandidateModel, SearchError> {
    search_with_report(series, config).map(SearchReport::into_best)
}

/// Selects and fits the best seasonal ARIMA order for `series`, returning
/// the full evaluation trace.
///
/// `D` is chosen first, then `d` on the seasonally differenced series.
/// Stepwise mode starts from `(2,d,2)(1,D,1)` and the null, AR and MA seed
/// models, then moves to the best of the ±1 neighbours of the current best
/// until none improves the criterion or the evaluation budget is spent.
/// Exhaustive mode evaluates the full `(p, q, P, Q)` grid up to the budget.
/// Candidates whose fit fails are kept in the trace but never selected.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SearchError::InvalidPeriod`], [`SearchError::InvalidMaxEvaluations`], [`SearchError::DifferencingAboveMax`], [`SearchError::Stationarity`] | invalid `config` |
/// | [`SearchError::Data`] | fewer than `2·m` observations for a seasonal search, or fewer than `m·D + d + 3` |
/// | [`SearchError::Exhausted`] | no candidate could be fitted |
#[tracing::instrument(skip_all, fields(n = series.len(), stepwise = config.stepwise()))]
pub fn search_with_report(series: &TimeSeries, config: &SearchConfig) -> Result<SearchReport, SearchError> {
    config.validate()?;
    let values = series.values();

    let period = if config.is_seasonal() { config.period() } else { 1 };
    if period > 1 {
        series.require_len(2 * period)?;
    }

    let seasonal_d = match config.seasonal_d() {
        _ if period == 1 => 0,
        Differencing::Fixed(k) => k,
        Differencing::Auto => {
            determine_seasonal_d(values, period, config.max_seasonal_d(), config.stationarity())
        }
    };
    let d = match config.d() {
        Differencing::Fixed(k) => k,
        Differencing::Auto => {
            let deseasoned = augur_stats::seasonal_difference(values, period, seasonal_d);
            determine_d(&deseasoned, config.max_d(), config.stationarity())
        }
    };
    series.require_len(period * seasonal_d + d + 3)?;
    info!(d, seasonal_d, period, "differencing orders");

    let bounds = OrderBounds {
        max_p: config.max_p(),
        max_q: config.max_q(),
        max_seasonal_p: config.max_seasonal_p(),
        max_seasonal_q: config.max_seasonal_q(),
        d,
        seasonal_d,
        period,
    };
    let options = config.resolved_fit_options();
    let mut state = SearchState::new();

    if config.stepwise() {
        run_stepwise(values, config, &bounds, &options, &mut state);
    } else {
        let all = grid(&bounds);
        debug!(grid = all.len(), budget = config.max_evaluations(), "exhaustive search");
        evaluate_round(values, &all, config, &options, &mut state);
    }

    let evaluated = state.evaluated();
    let (best, history) = state.into_parts();
    let best = best.ok_or(SearchError::Exhausted { evaluated })?;
    info!(
        order = %best.order(),
        criterion = %config.criterion(),
        value = best.criterion(),
        evaluated,
        "selected model"
    );

    Ok(SearchReport {
        best,
        evaluated: history,
        d,
        seasonal_d,
        criterion: config.criterion(),
    })
}

fn run_stepwise(
    data: &[f64],
    config: &SearchConfig,
    bounds: &OrderBounds,
    options: &FitOptions,
    state: &mut SearchState,
) {
    let mut frontier = initial_frontier(bounds);
    let mut round = 0usize;
    loop {
        let improved = evaluate_round(data, &frontier, config, options, state);
        round += 1;
        if state.evaluated() >= config.max_evaluations() {
            debug!(round, evaluated = state.evaluated(), "evaluation budget spent");
            return;
        }
        let Some(best) = state.best() else {
            return;
        };
        if !improved {
            debug!(round, best = %best.order(), "local optimum reached");
            return;
        }
        frontier = neighbours(&best.order(), bounds);
    }
}

/// Fits the unvisited orders of `frontier` and merges them into `state` in
/// frontier order. Returns `true` when the best criterion strictly dropped.
fn evaluate_round(
    data: &[f64],
    frontier: &[OrderSpec],
    config: &SearchConfig,
    options: &FitOptions,
    state: &mut SearchState,
) -> bool {
    let budget = config.max_evaluations().saturating_sub(state.evaluated());
    let pending = state.pending(frontier, budget);
    if pending.is_empty() {
        return false;
    }

    let criterion = config.criterion();
    let fit_one = |order: &OrderSpec| evaluate_candidate(data, *order, options, criterion);
    let candidates: Vec<CandidateModel> = if config.parallel() {
        pending.par_iter().map(fit_one).collect()
    } else {
        pending.iter().map(fit_one).collect()
    };

    let previous = state.best_criterion();
    for candidate in candidates {
        trace_candidate(&candidate, criterion);
        state.record(candidate);
    }
    state.improved_since(previous)
}

fn evaluate_candidate(data: &[f64], order: OrderSpec, options: &FitOptions, criterion: Criterion) -> CandidateModel {
    let start = Instant::now();
    let (outcome, score) = match order.fit(data, options) {
        Ok(fit) => {
            let score = criterion.score(&fit);
            (FitOutcome::Valid(fit), score)
        }
        Err(e) => (FitOutcome::Invalid(e), f64::INFINITY),
    };
    CandidateModel::new(order, outcome, score, start.elapsed())
}

fn trace_candidate(candidate: &CandidateModel, criterion: Criterion) {
    let elapsed_ms = candidate.elapsed().as_secs_f64() * 1e3;
    match candidate.outcome() {
        FitOutcome::Valid(fit) => info!(
            order = %candidate.order(),
            intercept = fit.intercept().is_some(),
            criterion = %criterion,
            value = candidate.criterion(),
            elapsed_ms,
            "fitted candidate"
        ),
        FitOutcome::Invalid(e) => debug!(
            order = %candidate.order(),
            error = %e,
            elapsed_ms,
            "candidate failed"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_distr::{Distribution, Normal};

    fn ar1(n: usize, phi: f64, seed: u64) -> TimeSeries {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, 1.0).unwrap();
        let mut x = 0.0;
        let values = (0..n)
            .map(|_| {
                x = phi * x + noise.sample(&mut rng);
                x
            })
            .collect();
        TimeSeries::from_values(values).unwrap()
    }

    #[test]
    fn budget_caps_evaluations() {
        let series = ar1(80, 0.6, 1);
        let config = SearchConfig::new()
            .with_d(Differencing::Fixed(0))
            .with_max_evaluations(2)
            .with_parallel(false);
        let report = search_with_report(&series, &config).unwrap();
        assert_eq!(report.evaluated().len(), 2);
        // (2,0,2) then (0,0,0) in frontier order.
        assert_eq!(report.evaluated()[0].order(), OrderSpec::new(2, 0, 2));
        assert_eq!(report.evaluated()[1].order(), OrderSpec::new(0, 0, 0));
    }

    #[test]
    fn fixed_orders_are_used() {
        let series = ar1(80, 0.6, 2);
        let config = SearchConfig::new()
            .with_d(Differencing::Fixed(1))
            .with_max_evaluations(4);
        let report = search_with_report(&series, &config).unwrap();
        assert_eq!(report.d(), 1);
        assert_eq!(report.seasonal_d(), 0);
        assert!(report.evaluated().iter().all(|c| c.order().d() == 1));
    }

    #[test]
    fn non_seasonal_search_ignores_period() {
        let series = ar1(60, 0.5, 3);
        let config = SearchConfig::new()
            .with_period(12)
            .with_seasonal(false)
            .with_max_evaluations(6);
        let report = search_with_report(&series, &config).unwrap();
        assert!(report.evaluated().iter().all(|c| c.order().period() == 1));
    }

    #[test]
    fn seasonal_search_requires_two_cycles() {
        let series = ar1(20, 0.5, 4);
        let config = SearchConfig::new().with_period(12);
        assert!(matches!(
            search(&series, &config),
            Err(SearchError::Data(augur_series::SeriesError::TooShort { n: 20, min: 24 }))
        ));
    }

    #[test]
    fn invalid_config_is_rejected_before_fitting() {
        let series = ar1(60, 0.5, 5);
        let config = SearchConfig::new().with_max_evaluations(0);
        assert_eq!(
            search(&series, &config).unwrap_err(),
            SearchError::InvalidMaxEvaluations
        );
    }
}
