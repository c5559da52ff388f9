//! Dense linear solves for the small systems that appear in autocovariance
//! and regression computations.

use ndarray::Array2;

/// Pivots smaller than this (relative to the largest absolute entry of the
/// matrix) are treated as zero.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Solves `A x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when `A` is not square, its size does not match `b`, or it
/// is numerically singular.
pub fn solve(a: &Array2<f64>, b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if a.nrows() != n || a.ncols() != n {
        return None;
    }
    if n == 0 {
        return Some(Vec::new());
    }

    let mut m = a.clone();
    let mut x = b.to_vec();

    let scale = m.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if !scale.is_finite() || scale == 0.0 {
        return None;
    }
    let tol = SINGULAR_TOLERANCE * scale;

    for col in 0..n {
        // Partial pivoting
        let pivot_row = (col..n).max_by(|&i, &j| {
            m[[i, col]]
                .abs()
                .partial_cmp(&m[[j, col]].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if m[[pivot_row, col]].abs() <= tol {
            return None;
        }
        if pivot_row != col {
            for k in 0..n {
                m.swap([col, k], [pivot_row, k]);
            }
            x.swap(col, pivot_row);
        }

        let pivot = m[[col, col]];
        for row in (col + 1)..n {
            let factor = m[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                m[[row, k]] -= factor * m[[col, k]];
            }
            x[row] -= factor * x[col];
        }
    }

    // Back substitution
    for row in (0..n).rev() {
        let mut sum = x[row];
        for k in (row + 1)..n {
            sum -= m[[row, k]] * x[k];
        }
        x[row] = sum / m[[row, row]];
    }

    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}
