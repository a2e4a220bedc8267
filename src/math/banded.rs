//! Symmetric banded matrices with a banded Cholesky solver.
//!
//! ## Purpose
//!
//! The Whittaker-Eilers system `(I + lambda * D^T D) z = y` is symmetric
//! positive-definite with half-bandwidth equal to the penalty order. This
//! module stores only the band and factorizes in place, keeping the per-sample
//! solve near-linear in window size.
//!
//! ## Design notes
//!
//! * **Storage**: Lower band, column-major: entry `(i, j)` with
//!   `j <= i <= j + bandwidth` lives at `data[j * (bandwidth + 1) + (i - j)]`.
//! * **Cost**: Factorization and the two triangular solves are
//!   `O(n * bandwidth^2)`, comfortably inside the host's per-sample budget.
//! * **Failure**: A non-positive pivot aborts with `false`; the caller maps
//!   that to its solver-failure fallback. It cannot occur for the regularized
//!   penalty system, which is why the check is defensive rather than an
//!   invariant the caller must uphold.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Lower-band storage of a symmetric `n x n` matrix.
#[derive(Debug, Clone)]
pub struct SymmetricBanded<T> {
    n: usize,
    bandwidth: usize,
    data: Vec<T>,
}

impl<T: Float> SymmetricBanded<T> {
    /// Create a zeroed matrix with the given half-bandwidth.
    pub fn zeros(n: usize, bandwidth: usize) -> Self {
        debug_assert!(n > 0, "SymmetricBanded::zeros: empty matrix");
        Self {
            n,
            bandwidth,
            data: vec![T::zero(); n * (bandwidth + 1)],
        }
    }

    /// Matrix dimension.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has dimension zero.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Set entry `(i, j)` of the lower band (`j <= i <= j + bandwidth`).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(j <= i && i - j <= self.bandwidth && i < self.n);
        self.data[j * (self.bandwidth + 1) + (i - j)] = value;
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T {
        self.data[j * (self.bandwidth + 1) + (i - j)]
    }

    /// Solve `A x = rhs` in place via banded Cholesky.
    ///
    /// Consumes the matrix contents (the band is overwritten by the factor)
    /// and overwrites `rhs` with the solution. Returns `false` when the
    /// matrix is not numerically positive-definite.
    pub fn solve_in_place(&mut self, rhs: &mut [T]) -> bool {
        let n = self.n;
        let bw = self.bandwidth;
        debug_assert_eq!(rhs.len(), n, "solve_in_place: rhs length mismatch");

        // Factorize A = L L^T within the band.
        for j in 0..n {
            let lo = j.saturating_sub(bw);

            let mut d = self.get(j, j);
            for k in lo..j {
                let l_jk = self.get(j, k);
                d = d - l_jk * l_jk;
            }
            if d <= T::zero() || !d.is_finite() {
                return false;
            }
            let l_jj = d.sqrt();
            self.set(j, j, l_jj);

            let hi = usize::min(n - 1, j + bw);
            for i in (j + 1)..=hi {
                let mut s = self.get(i, j);
                let lo_i = i.saturating_sub(bw);
                for k in usize::max(lo, lo_i)..j {
                    s = s - self.get(i, k) * self.get(j, k);
                }
                self.set(i, j, s / l_jj);
            }
        }

        // Forward substitution: L u = rhs.
        for i in 0..n {
            let lo = i.saturating_sub(bw);
            let mut s = rhs[i];
            for k in lo..i {
                s = s - self.get(i, k) * rhs[k];
            }
            rhs[i] = s / self.get(i, i);
        }

        // Back substitution: L^T x = u.
        for i in (0..n).rev() {
            let hi = usize::min(n - 1, i + bw);
            let mut s = rhs[i];
            for k in (i + 1)..=hi {
                s = s - self.get(k, i) * rhs[k];
            }
            rhs[i] = s / self.get(i, i);
        }

        true
    }
}
