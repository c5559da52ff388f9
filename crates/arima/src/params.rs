//! Unconstrained parametrisation of the four coefficient blocks.
//!
//! **Not part of the public API.**

use crate::error::ArimaError;
use crate::order::OrderSpec;

/// Partial autocorrelations at or beyond this magnitude put a block on the
/// stationarity/invertibility boundary.
pub(crate) const BOUNDARY: f64 = 1.0 - 1e-3;

/// Maps unconstrained parameters to stationary AR coefficients via the
/// PACF parametrization (Jones 1980, Monahan 1984).
///
/// Step 1: `r_k = tanh(alpha_k)` maps each parameter to (-1, 1).
/// Step 2: Levinson-Durbin recursion converts partial autocorrelations
///         to polynomial coefficients.
pub(crate) fn unconstrained_to_coeffs(alpha: &[f64]) -> Vec<f64> {
    let p = alpha.len();
    if p == 0 {
        return Vec::new();
    }

    // Step 1: map each unconstrained parameter to (-1, 1) via tanh
    let r: Vec<f64> = alpha.iter().map(|a| a.tanh()).collect();

    // Step 2: Levinson-Durbin recursion
    let mut phi = vec![0.0; p];
    let mut prev = vec![0.0; p];

    phi[0] = r[0];

    for k in 1..p {
        // Copy phi into prev
        prev[..p].copy_from_slice(&phi[..p]);

        phi[k] = r[k];
        for j in 0..k {
            phi[j] = prev[j] - r[k] * prev[k - 1 - j];
        }
    }

    phi
}

/// Coefficients of a seasonal ARMA model in natural form.
///
/// AR blocks are right-hand-side coefficients (`1 − Σφ_k B^k`), MA blocks
/// multiply `1 + Σθ_k B^k`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Coefficients {
    pub(crate) ar: Vec<f64>,
    pub(crate) ma: Vec<f64>,
    pub(crate) seasonal_ar: Vec<f64>,
    pub(crate) seasonal_ma: Vec<f64>,
}

/// Position of each block in the flat optimiser parameter vector, in the
/// order `[φ | θ | Φ | Θ]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParamLayout {
    p: usize,
    q: usize,
    seasonal_p: usize,
    seasonal_q: usize,
}

impl ParamLayout {
    pub(crate) fn new(order: &OrderSpec) -> Self {
        Self {
            p: order.p(),
            q: order.q(),
            seasonal_p: order.seasonal_p(),
            seasonal_q: order.seasonal_q(),
        }
    }

    /// Total number of free coefficients.
    pub(crate) fn dim(&self) -> usize {
        self.p + self.q + self.seasonal_p + self.seasonal_q
    }

    fn blocks<'a>(&self, params: &'a [f64]) -> [&'a [f64]; 4] {
        let (ar, rest) = params.split_at(self.p);
        let (ma, rest) = rest.split_at(self.q);
        let (sar, sma) = rest.split_at(self.seasonal_p);
        [ar, ma, sar, &sma[..self.seasonal_q]]
    }

    /// Maps unconstrained parameters to stationary AR and invertible MA
    /// coefficients. MA blocks are negated so that `1 + Σθ_k B^k` is the
    /// invertible counterpart of a stationary AR operator.
    pub(crate) fn coefficients(&self, params: &[f64]) -> Coefficients {
        let [ar, ma, sar, sma] = self.blocks(params);
        let negate = |v: Vec<f64>| v.into_iter().map(|c| -c).collect::<Vec<f64>>();
        Coefficients {
            ar: unconstrained_to_coeffs(ar),
            ma: negate(unconstrained_to_coeffs(ma)),
            seasonal_ar: unconstrained_to_coeffs(sar),
            seasonal_ma: negate(unconstrained_to_coeffs(sma)),
        }
    }

    /// Rejects parameters whose partial autocorrelations sit on the
    /// boundary.
    ///
    /// # Errors
    ///
    /// [`ArimaError::NonStationary`] for an AR block and
    /// [`ArimaError::NonInvertible`] for an MA block.
    pub(crate) fn check_boundary(&self, params: &[f64]) -> Result<(), ArimaError> {
        let [ar, ma, sar, sma] = self.blocks(params);
        let on_boundary = |block: &[f64]| block.iter().any(|a| a.tanh().abs() >= BOUNDARY);
        if on_boundary(ar) || on_boundary(sar) {
            return Err(ArimaError::NonStationary);
        }
        if on_boundary(ma) || on_boundary(sma) {
            return Err(ArimaError::NonInvertible);
        }
        Ok(())
    }
}
