//! ARMA state-space representation.
//!
//! Converts expanded ARMA coefficients into Harvey's state-space form:
//!
//! ```text
//! x[t+1] = T * x[t] + R * e[t+1]    (state transition)
//! y[t]   = Z' * x[t]                (observation, Z = e₁)
//! ```
//!
//! where `T` holds the AR coefficients in its first column and ones on the
//! super-diagonal, `R = [1, θ₁, …, θ_q, 0, …]`, and `e[t] ~ N(0, sigma2)`.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2, Axis};

use crate::poly;

/// State-space representation of an ARMA(p,q) model.
///
/// Holds the transition matrix `T`, noise input vector `R`, and
/// precomputed `R·Rᵀ` for the Kalman filter.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    r: usize,
    ar: Vec<f64>,
    ma: Vec<f64>,
    t: Array2<f64>,
    r_vec: Array1<f64>,
    rrt: Array2<f64>,
}

impl StateSpace {
    /// Builds a state-space representation from expanded AR and MA
    /// coefficients.
    pub(crate) fn new(ar: &[f64], ma: &[f64]) -> Self {
        let p = ar.len();
        let q = ma.len();
        let r = p.max(q + 1).max(1);

        let mut t = Array2::zeros((r, r));
        for (i, a) in ar.iter().enumerate() {
            t[[i, 0]] = *a;
        }
        for i in 0..r.saturating_sub(1) {
            t[[i, i + 1]] = 1.0;
        }

        let mut r_vec = Array1::zeros(r);
        r_vec[0] = 1.0;
        for (j, c) in ma.iter().enumerate() {
            r_vec[j + 1] = *c;
        }

        let r_col = r_vec.view().insert_axis(Axis(1));
        let r_row = r_vec.view().insert_axis(Axis(0));
        let rrt = r_col.dot(&r_row);

        Self {
            r,
            ar: ar.to_vec(),
            ma: ma.to_vec(),
            t,
            r_vec,
            rrt,
        }
    }

    /// State dimension `r = max(p, q+1)`, minimum 1.
    pub(crate) fn r(&self) -> usize {
        self.r
    }

    /// Transition matrix `T` (r×r) in companion form.
    #[cfg(test)]
    pub(crate) fn t(&self) -> &Array2<f64> {
        &self.t
    }

    /// Noise input vector `R` (length r).
    #[cfg(test)]
    pub(crate) fn r_vec(&self) -> &Array1<f64> {
        &self.r_vec
    }

    /// AR coefficient `i` (0-based lag index), zero beyond the AR order.
    pub(crate) fn phi(&self, i: usize) -> f64 {
        self.t.get((i, 0)).copied().unwrap_or(0.0)
    }

    /// Stationary state covariance `P₀` solving `P = T·P·Tᵀ + R·Rᵀ`, for
    /// unit innovation variance.
    ///
    /// The first row comes from the ARMA autocovariances and ψ-weights;
    /// the remaining entries follow from the transition structure, filled
    /// from the bottom-right corner upwards. Returns `None` when the AR
    /// operator is not stationary.
    pub(crate) fn stationary_covariance(&self) -> Option<Array2<f64>> {
        let r = self.r;
        let gamma = poly::autocovariances(&self.ar, &self.ma, r)?;
        let psi = poly::psi_weights(&self.ar, &self.ma, r);

        let mut p0 = Array2::<f64>::zeros((r, r));
        for i in 0..r {
            let mut value = 0.0;
            for l in 0..(r - i) {
                value += self.phi(i + l) * gamma[l + 1] + self.r_vec[i + l] * psi[l];
            }
            p0[[0, i]] = value;
            p0[[i, 0]] = value;
        }
        p0[[0, 0]] = gamma[0];

        let p00 = gamma[0];
        for i in (1..r).rev() {
            for j in (i..r).rev() {
                let below = if i + 1 < r && j + 1 < r {
                    p0[[i + 1, j + 1]]
                } else {
                    0.0
                };
                let row0 = if j + 1 < r { p0[[0, j + 1]] } else { 0.0 };
                let col0 = if i + 1 < r { p0[[i + 1, 0]] } else { 0.0 };
                let value = self.phi(i) * self.phi(j) * p00
                    + self.phi(i) * row0
                    + self.phi(j) * col0
                    + below
                    + self.rrt[[i, j]];
                p0[[i, j]] = value;
                p0[[j, i]] = value;
            }
        }

        if p0.iter().all(|v| v.is_finite()) {
            Some(p0)
        } else {
            None
        }
    }

    /// One-step covariance propagation `T·P·Tᵀ + R·Rᵀ`, exploiting the
    /// companion structure of `T` (O(r²) instead of O(r³)).
    pub(crate) fn propagate(&self, p: &Array2<f64>) -> Array2<f64> {
        let r = self.r;
        let p00 = p[[0, 0]];
        let mut out = Array2::<f64>::zeros((r, r));
        for i in 0..r {
            for j in i..r {
                let row0 = if j + 1 < r { p[[0, j + 1]] } else { 0.0 };
                let col0 = if i + 1 < r { p[[i + 1, 0]] } else { 0.0 };
                let below = if i + 1 < r && j + 1 < r {
                    p[[i + 1, j + 1]]
                } else {
                    0.0
                };
                let value = self.phi(i) * self.phi(j) * p00
                    + self.phi(i) * row0
                    + self.phi(j) * col0
                    + below
                    + self.rrt[[i, j]];
                out[[i, j]] = value;
                out[[j, i]] = value;
            }
        }
        out
    }
}
