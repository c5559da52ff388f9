//! Lag-polynomial arithmetic for multiplicative seasonal models.
//!
//! AR coefficients are stored in "right-hand side" form, so that
//! `[a₁, a₂, ..]` means `x_t = a₁·x_{t−1} + a₂·x_{t−2} + ..`, i.e. the lag
//! polynomial `1 − a₁B − a₂B² − ..`. MA coefficients `[c₁, c₂, ..]` mean
//! `1 + c₁B + c₂B² + ..`.
//!
//! **Not part of the public API.**

use ndarray::Array2;

/// Product of two full polynomials (constant term included).
pub(crate) fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if *x == 0.0 {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Full polynomial `1 + sign·Σ coeffs[k]·B^{(k+1)·stride}`.
fn lag_polynomial(coeffs: &[f64], stride: usize, sign: f64) -> Vec<f64> {
    let mut poly = vec![0.0; coeffs.len() * stride + 1];
    poly[0] = 1.0;
    for (k, c) in coeffs.iter().enumerate() {
        poly[(k + 1) * stride] = sign * c;
    }
    poly
}

/// Drops the constant term and trailing zeros.
fn strip(poly: Vec<f64>, sign: f64) -> Vec<f64> {
    let mut out: Vec<f64> = poly.into_iter().skip(1).map(|c| sign * c).collect();
    while out.last() == Some(&0.0) {
        out.pop();
    }
    out
}

/// Expands `φ(B)·Φ(B^m)` into right-hand-side AR coefficients.
pub(crate) fn expand_ar(ar: &[f64], seasonal_ar: &[f64], m: usize) -> Vec<f64> {
    let product = multiply(
        &lag_polynomial(ar, 1, -1.0),
        &lag_polynomial(seasonal_ar, m.max(1), -1.0),
    );
    strip(product, -1.0)
}

/// Expands `θ(B)·Θ(B^m)` into MA coefficients.
pub(crate) fn expand_ma(ma: &[f64], seasonal_ma: &[f64], m: usize) -> Vec<f64> {
    let product = multiply(
        &lag_polynomial(ma, 1, 1.0),
        &lag_polynomial(seasonal_ma, m.max(1), 1.0),
    );
    strip(product, 1.0)
}

/// Folds `(1−B)^d·(1−B^m)^D` into an expanded AR operator.
///
/// The result is the (non-stationary) AR operator of the undifferenced
/// series, used for forecast-error variances.
pub(crate) fn integrated_ar(ar: &[f64], d: usize, seasonal_d: usize, m: usize) -> Vec<f64> {
    let mut poly = lag_polynomial(ar, 1, -1.0);
    for _ in 0..d {
        poly = multiply(&poly, &[1.0, -1.0]);
    }
    for _ in 0..seasonal_d {
        poly = multiply(&poly, &lag_polynomial(&[1.0], m.max(1), -1.0));
    }
    strip(poly, -1.0)
}

/// MA(∞) weights `ψ₀ = 1, ψ_j = c_j + Σ_k a_k·ψ_{j−k}`, for `j < n`.
pub(crate) fn psi_weights(ar: &[f64], ma: &[f64], n: usize) -> Vec<f64> {
    let mut psi = Vec::with_capacity(n);
    for j in 0..n {
        if j == 0 {
            psi.push(1.0);
            continue;
        }
        let mut value = if j <= ma.len() { ma[j - 1] } else { 0.0 };
        for (k, a) in ar.iter().enumerate().take(j) {
            value += a * psi[j - 1 - k];
        }
        psi.push(value);
    }
    psi
}

/// Autocovariances `γ(0..=max_lag)` of a stationary ARMA process with unit
/// innovation variance.
///
/// Solves the first `p+1` moment equations
/// `γ(h) − Σ a_k·γ(|h−k|) = Σ_{j≥h} c_j·ψ_{j−h}` (with `c₀ = 1`) and
/// extends by recursion. Returns `None` if the AR operator is too close to
/// a unit root for the system to be solved.
pub(crate) fn autocovariances(ar: &[f64], ma: &[f64], max_lag: usize) -> Option<Vec<f64>> {
    let p = ar.len();
    let q = ma.len();
    let psi = psi_weights(ar, ma, q + 1);
    let theta = |j: usize| if j == 0 { 1.0 } else { ma[j - 1] };
    let rhs = |h: usize| -> f64 { (h..=q).map(|j| theta(j) * psi[j - h]).sum() };

    let mut a = Array2::<f64>::zeros((p + 1, p + 1));
    let mut b = vec![0.0; p + 1];
    for h in 0..=p {
        a[[h, h]] += 1.0;
        for (k, coeff) in ar.iter().enumerate() {
            let lag = (h as isize - (k as isize + 1)).unsigned_abs();
            a[[h, lag]] -= coeff;
        }
        b[h] = rhs(h);
    }
    let mut gamma = augur_stats::solve(&a, &b)?;
    if !(gamma[0].is_finite() && gamma[0] > 0.0) {
        return None;
    }

    for h in (p + 1)..=max_lag {
        let mut value = rhs(h);
        for (k, coeff) in ar.iter().enumerate() {
            value += coeff * gamma[h - k - 1];
        }
        gamma.push(value);
    }
    gamma.truncate(max_lag + 1);
    Some(gamma)
}
