//! Candidate generation: starting frontier, neighbourhoods and the full grid.
//!
//! **Not part of the public API.**

use augur_arima::OrderSpec;

/// Bounds on the searched ARMA orders, plus the fixed differencing and
/// period shared by every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OrderBounds {
    pub(crate) max_p: usize,
    pub(crate) max_q: usize,
    pub(crate) max_seasonal_p: usize,
    pub(crate) max_seasonal_q: usize,
    pub(crate) d: usize,
    pub(crate) seasonal_d: usize,
    /// 1 when the search is not seasonal.
    pub(crate) period: usize,
}

impl OrderBounds {
    /// Builds the order `(p,d,q)(P,D,Q)[m]`, clipping each ARMA order to
    /// its maximum.
    pub(crate) fn order(&self, p: usize, q: usize, seasonal_p: usize, seasonal_q: usize) -> OrderSpec {
        let base = OrderSpec::new(p.min(self.max_p), self.d, q.min(self.max_q));
        if self.period > 1 {
            base.with_seasonal(
                seasonal_p.min(self.max_seasonal_p),
                self.seasonal_d,
                seasonal_q.min(self.max_seasonal_q),
                self.period,
            )
        } else {
            base
        }
    }
}

/// `(2,d,2)(1,D,1)` followed by the null, AR and MA seed models.
/// Duplicates created by clipping are removed, keeping the first.
pub(crate) fn initial_frontier(bounds: &OrderBounds) -> Vec<OrderSpec> {
    let mut frontier = Vec::with_capacity(4);
    for (p, q, sp, sq) in [(2, 2, 1, 1), (0, 0, 0, 0), (1, 0, 1, 0), (0, 1, 0, 1)] {
        let order = bounds.order(p, q, sp, sq);
        if !frontier.contains(&order) {
            frontier.push(order);
        }
    }
    frontier
}

/// Orders one step away from `center`: `p−1, p+1, q−1, q+1, P−1, P+1,
/// Q−1, Q+1`, skipping any that fall outside the bounds.
pub(crate) fn neighbours(center: &OrderSpec, bounds: &OrderBounds) -> Vec<OrderSpec> {
    let current = [
        center.p(),
        center.q(),
        center.seasonal_p(),
        center.seasonal_q(),
    ];
    let maxima = [
        bounds.max_p,
        bounds.max_q,
        bounds.max_seasonal_p,
        bounds.max_seasonal_q,
    ];

    let mut out = Vec::with_capacity(8);
    for axis in 0..4 {
        let steps = [current[axis].checked_sub(1), Some(current[axis] + 1)];
        for value in steps.into_iter().flatten() {
            if value > maxima[axis] {
                continue;
            }
            let mut next = current;
            next[axis] = value;
            out.push(bounds.order(next[0], next[1], next[2], next[3]));
        }
    }
    out
}

/// Every order in `0..=max_p × 0..=max_q × 0..=max_P × 0..=max_Q`, in
/// ascending [`OrderSpec`] order.
pub(crate) fn grid(bounds: &OrderBounds) -> Vec<OrderSpec> {
    let mut out = Vec::new();
    for p in 0..=bounds.max_p {
        for q in 0..=bounds.max_q {
            for sp in 0..=bounds.max_seasonal_p {
                for sq in 0..=bounds.max_seasonal_q {
                    out.push(bounds.order(p, q, sp, sq));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasonal_bounds() -> OrderBounds {
        OrderBounds {
            max_p: 5,
            max_q: 5,
            max_seasonal_p: 2,
            max_seasonal_q: 2,
            d: 1,
            seasonal_d: 1,
            period: 12,
        }
    }

    fn plain_bounds() -> OrderBounds {
        OrderBounds {
            max_seasonal_p: 0,
            max_seasonal_q: 0,
            seasonal_d: 0,
            period: 1,
            ..seasonal_bounds()
        }
    }

    #[test]
    fn initial_frontier_seasonal() {
        let f = initial_frontier(&seasonal_bounds());
        assert_eq!(
            f,
            vec![
                OrderSpec::new(2, 1, 2).with_seasonal(1, 1, 1, 12),
                OrderSpec::new(0, 1, 0).with_seasonal(0, 1, 0, 12),
                OrderSpec::new(1, 1, 0).with_seasonal(1, 1, 0, 12),
                OrderSpec::new(0, 1, 1).with_seasonal(0, 1, 1, 12),
            ]
        );
    }

    #[test]
    fn initial_frontier_non_seasonal() {
        let f = initial_frontier(&plain_bounds());
        assert_eq!(
            f,
            vec![
                OrderSpec::new(2, 1, 2),
                OrderSpec::new(0, 1, 0),
                OrderSpec::new(1, 1, 0),
                OrderSpec::new(0, 1, 1),
            ]
        );
    }

    #[test]
    fn initial_frontier_deduplicates_after_clipping() {
        let bounds = OrderBounds {
            max_p: 0,
            max_q: 0,
            ..plain_bounds()
        };
        assert_eq!(initial_frontier(&bounds), vec![OrderSpec::new(0, 1, 0)]);
    }

    #[test]
    fn neighbours_in_fixed_order() {
        let center = OrderSpec::new(1, 1, 1).with_seasonal(1, 1, 1, 12);
        let n = neighbours(&center, &seasonal_bounds());
        let expected = vec![
            OrderSpec::new(0, 1, 1).with_seasonal(1, 1, 1, 12),
            OrderSpec::new(2, 1, 1).with_seasonal(1, 1, 1, 12),
            OrderSpec::new(1, 1, 0).with_seasonal(1, 1, 1, 12),
            OrderSpec::new(1, 1, 2).with_seasonal(1, 1, 1, 12),
            OrderSpec::new(1, 1, 1).with_seasonal(0, 1, 1, 12),
            OrderSpec::new(1, 1, 1).with_seasonal(2, 1, 1, 12),
            OrderSpec::new(1, 1, 1).with_seasonal(1, 1, 0, 12),
            OrderSpec::new(1, 1, 1).with_seasonal(1, 1, 2, 12),
        ];
        assert_eq!(n, expected);
    }

    #[test]
    fn neighbours_respect_bounds() {
        let center = OrderSpec::new(0, 1, 5);
        let n = neighbours(&center, &plain_bounds());
        assert_eq!(n, vec![OrderSpec::new(1, 1, 5), OrderSpec::new(0, 1, 4)]);
    }

    #[test]
    fn grid_covers_every_combination() {
        let bounds = OrderBounds {
            max_p: 1,
            max_q: 2,
            max_seasonal_p: 1,
            max_seasonal_q: 0,
            ..seasonal_bounds()
        };
        let g = grid(&bounds);
        assert_eq!(g.len(), 2 * 3 * 2);
        let mut sorted = g.clone();
        sorted.sort();
        assert_eq!(g, sorted);
        sorted.dedup();
        assert_eq!(sorted.len(), g.len());
    }
}
