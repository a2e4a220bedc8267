//! Least-squares polynomial fitting evaluated at the origin.
//!
//! ## Purpose
//!
//! This module fits a polynomial of a given degree to `(x, y)` pairs by
//! solving the normal equations, and returns the fitted value at `x = 0`.
//! The Savitzky-Golay filter shifts timestamps so the newest sample sits at
//! the origin, which makes the requested estimate exactly the constant
//! coefficient of the fit.
//!
//! ## Design notes
//!
//! * **Normal equations**: The Gram matrix is built from power sums of the
//!   abscissas; for the small degrees used here (typically 2-4) this is well
//!   conditioned because relative times span only a few seconds.
//! * **Dense Cholesky**: The Gram matrix is symmetric positive-definite when
//!   the abscissas are distinct and `n >= degree + 1`; factorization failure
//!   signals a degenerate fit and is reported as `None` so the caller can
//!   apply its fallback policy.
//!
//! ## Non-goals
//!
//! * No derivative estimation; smoothing only.
//! * No precomputed convolution kernels. The window is causal and spacing is
//!   not guaranteed uniform, so the general fit is the correct method.

// External dependencies
use num_traits::Float;

/// Fit a degree-`degree` polynomial to `(x, y)` and evaluate it at `x = 0`.
///
/// Returns `None` when the normal equations are not positive-definite or the
/// result is non-finite. Requires `x.len() == y.len()` and
/// `x.len() >= degree + 1`.
pub fn fit_at_origin<T: Float>(x: &[T], y: &[T], degree: usize) -> Option<T> {
    let n = x.len();
    let m = degree + 1;
    debug_assert_eq!(n, y.len(), "fit_at_origin: mismatched slice lengths");
    debug_assert!(n >= m, "fit_at_origin: underdetermined fit");

    // Power sums s_k = sum x_i^k for k in 0..2*degree, accumulated in one
    // pass per sample.
    let mut moments = vec![T::zero(); 2 * degree + 1];
    let mut rhs = vec![T::zero(); m];

    for i in 0..n {
        let mut p = T::one();
        for k in 0..=2 * degree {
            moments[k] = moments[k] + p;
            if k < m {
                rhs[k] = rhs[k] + p * y[i];
            }
            p = p * x[i];
        }
    }

    // Gram matrix G[j][k] = s_{j+k}, row-major.
    let mut gram = vec![T::zero(); m * m];
    for j in 0..m {
        for k in 0..m {
            gram[j * m + k] = moments[j + k];
        }
    }

    let coeffs = cholesky_solve(&mut gram, &mut rhs, m)?;
    if coeffs[0].is_finite() {
        Some(coeffs[0])
    } else {
        None
    }
}

/// Solve the symmetric positive-definite system `A x = b` in place.
///
/// `a` is row-major `m x m`; on success `b` holds the solution. Returns
/// `None` when a non-positive pivot is encountered.
fn cholesky_solve<'a, T: Float>(a: &mut [T], b: &'a mut [T], m: usize) -> Option<&'a [T]> {
    // Factorize A = L L^T, overwriting the lower triangle.
    for j in 0..m {
        let mut d = a[j * m + j];
        for k in 0..j {
            d = d - a[j * m + k] * a[j * m + k];
        }
        if d <= T::zero() || !d.is_finite() {
            return None;
        }
        let ljj = d.sqrt();
        a[j * m + j] = ljj;

        for i in (j + 1)..m {
            let mut s = a[i * m + j];
            for k in 0..j {
                s = s - a[i * m + k] * a[j * m + k];
            }
            a[i * m + j] = s / ljj;
        }
    }

    // Forward substitution: L u = b.
    for i in 0..m {
        let mut s = b[i];
        for k in 0..i {
            s = s - a[i * m + k] * b[k];
        }
        b[i] = s / a[i * m + i];
    }

    // Back substitution: L^T x = u.
    for i in (0..m).rev() {
        let mut s = b[i];
        for k in (i + 1)..m {
            s = s - a[k * m + i] * b[k];
        }
        b[i] = s / a[i * m + i];
    }

    Some(b)
}
