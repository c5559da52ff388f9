//! Kalman filter for ARMA likelihood evaluation.
//!
//! Implements a univariate Kalman filter operating on the state-space
//! representation from [`crate::state_space`], started from the exact
//! stationary covariance. The Gaussian log-likelihood is evaluated via the
//! prediction error decomposition with the innovation variance profiled
//! out (concentrated likelihood).
//!
//! Once the state covariance has converged the filter stops updating it;
//! for invertible models this happens after a few dozen observations.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};

use crate::error::ArimaError;
use crate::state_space::StateSpace;

/// Absolute change in the state covariance below which it is treated as
/// converged.
const STEADY_STATE_TOL: f64 = 1e-10;

/// Output of a full Kalman pass.
#[derive(Clone, Debug)]
pub(crate) struct KalmanOutput {
    /// Profiled innovation variance `σ̂² = Σ v²/f / n`.
    pub(crate) sigma2: f64,
    /// One-step prediction errors `v_t`.
    pub(crate) residuals: Vec<f64>,
    /// Concentrated log-likelihood.
    pub(crate) log_likelihood: f64,
    /// Predicted state `a_{n+1|n}` after the last observation.
    pub(crate) predicted_state: Vec<f64>,
}

struct FilterSums {
    sum_sq: f64,
    sum_log_f: f64,
    predicted: Vec<f64>,
}

/// Runs the filter, calling `on_step(v, f)` for every observation.
fn filter(
    ss: &StateSpace,
    data: &[f64],
    mut on_step: impl FnMut(f64, f64),
) -> Result<FilterSums, ArimaError> {
    let r = ss.r();
    let mut p: Array2<f64> = ss
        .stationary_covariance()
        .ok_or(ArimaError::NonStationary)?;
    let mut a = Array1::<f64>::zeros(r);
    let mut a_f = Array1::<f64>::zeros(r);
    let mut converged = false;

    let mut sums = FilterSums {
        sum_sq: 0.0,
        sum_log_f: 0.0,
        predicted: Vec::new(),
    };

    for &y in data {
        let f = p[[0, 0]];
        if !f.is_finite() || f <= 0.0 {
            return Err(ArimaError::SingularCovariance);
        }
        let v = y - a[0];
        sums.sum_sq += v * v / f;
        sums.sum_log_f += f.ln();
        on_step(v, f);

        // Filtered state a + P[:,0]·v/f, then predicted state T·a_f.
        for i in 0..r {
            a_f[i] = a[i] + p[[i, 0]] * v / f;
        }
        for i in 0..r {
            let next = if i + 1 < r { a_f[i + 1] } else { 0.0 };
            a[i] = ss.phi(i) * a_f[0] + next;
        }

        if !converged {
            let mut p_f = p.clone();
            for i in 0..r {
                for j in 0..r {
                    p_f[[i, j]] -= p[[i, 0]] * p[[0, j]] / f;
                }
            }
            let p_next = ss.propagate(&p_f);
            let change = p_next
                .iter()
                .zip(p.iter())
                .fold(0.0_f64, |acc, (x, y)| acc.max((x - y).abs()));
            converged = change < STEADY_STATE_TOL;
            p = p_next;
        }
    }

    sums.predicted = a.to_vec();
    Ok(sums)
}

fn concentrated(n: usize, sums: &FilterSums) -> Result<(f64, f64), ArimaError> {
    let nf = n as f64;
    let sigma2 = sums.sum_sq / nf;
    if !sigma2.is_finite() || sigma2 <= 0.0 {
        return Err(ArimaError::SingularCovariance);
    }
    let loglik = -0.5
        * (nf * ((2.0 * std::f64::consts::PI).ln() + 1.0) + nf * sigma2.ln() + sums.sum_log_f);
    Ok((sigma2, loglik))
}

/// Concentrated log-likelihood only (used inside the optimiser).
pub(crate) fn kalman_concentrated_loglik(ss: &StateSpace, data: &[f64]) -> Result<f64, ArimaError> {
    let sums = filter(ss, data, |_, _| {})?;
    concentrated(data.len(), &sums).map(|(_, loglik)| loglik)
}

/// Full pass returning σ̂², the innovations and the log-likelihood.
pub(crate) fn kalman_full(ss: &StateSpace, data: &[f64]) -> Result<KalmanOutput, ArimaError> {
    let mut residuals = Vec::with_capacity(data.len());
    let sums = filter(ss, data, |v, _| residuals.push(v))?;
    let (sigma2, log_likelihood) = concentrated(data.len(), &sums)?;
    Ok(KalmanOutput {
        sigma2,
        residuals,
        log_likelihood,
        predicted_state: sums.predicted,
    })
}
