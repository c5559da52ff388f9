//! Bookkeeping for one search call.
//!
//! **Not part of the public API.**

use std::cmp::Ordering;
use std::collections::BTreeSet;

use augur_arima::OrderSpec;

use crate::candidate::CandidateModel;

/// Criterion differences smaller than this are ties.
pub(crate) const TIE_EPSILON: f64 = 1e-6;

/// Ranks two candidates; `Less` means `a` is preferred.
///
/// Invalid candidates rank last. Among valid ones, a criterion lower by
/// more than [`TIE_EPSILON`] wins, then fewer coefficients, then the
/// smaller order.
pub(crate) fn rank(a: &CandidateModel, b: &CandidateModel) -> Ordering {
    match (a.is_valid(), b.is_valid()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => return a.order().cmp(&b.order()),
        (true, true) => {}
    }
    let diff = a.criterion() - b.criterion();
    if diff < -TIE_EPSILON {
        return Ordering::Less;
    }
    if diff > TIE_EPSILON {
        return Ordering::Greater;
    }
    a.order()
        .n_coefficients()
        .cmp(&b.order().n_coefficients())
        .then_with(|| a.order().cmp(&b.order()))
}

/// Visited set, evaluation history and running best.
///
/// Only the merge step writes to it, one candidate at a time.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    visited: BTreeSet<OrderSpec>,
    history: Vec<CandidateModel>,
    best: Option<usize>,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_visited(&self, order: &OrderSpec) -> bool {
        self.visited.contains(order)
    }

    pub(crate) fn evaluated(&self) -> usize {
        self.history.len()
    }

    /// Orders from `frontier` that have not been evaluated, deduplicated,
    /// in frontier order and truncated to `budget`.
    pub(crate) fn pending(&self, frontier: &[OrderSpec], budget: usize) -> Vec<OrderSpec> {
        let mut seen = BTreeSet::new();
        frontier
            .iter()
            .filter(|o| !self.is_visited(o) && seen.insert(**o))
            .take(budget)
            .copied()
            .collect()
    }

    /// Records an evaluated candidate. Returns `true` when it became the
    /// new best.
    ///
    /// A candidate whose order was already visited is dropped.
    pub(crate) fn record(&mut self, candidate: CandidateModel) -> bool {
        if !self.visited.insert(candidate.order()) {
            return false;
        }
        let improves = candidate.is_valid()
            && self
                .best()
                .is_none_or(|best| rank(&candidate, best) == Ordering::Less);
        self.history.push(candidate);
        if improves {
            self.best = Some(self.history.len() - 1);
        }
        improves
    }

    /// Criterion of the current best, if any.
    pub(crate) fn best_criterion(&self) -> Option<f64> {
        self.best().map(CandidateModel::criterion)
    }

    /// Whether the best criterion dropped by more than [`TIE_EPSILON`]
    /// below `previous`. Simpler models that only tie do not count.
    pub(crate) fn improved_since(&self, previous: Option<f64>) -> bool {
        match (self.best_criterion(), previous) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(current), Some(previous)) => current < previous - TIE_EPSILON,
        }
    }

    pub(crate) fn best(&self) -> Option<&CandidateModel> {
        self.best.map(|i| &self.history[i])
    }

    /// Splits into the best candidate and the full history.
    pub(crate) fn into_parts(self) -> (Option<CandidateModel>, Vec<CandidateModel>) {
        let best = self.best.map(|i| self.history[i].clone());
        (best, self.history)
    }
}
