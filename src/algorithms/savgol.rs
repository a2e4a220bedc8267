//! Savitzky-Golay smoothing for the newest sample.
//!
//! ## Purpose
//!
//! This module produces a single smoothed estimate for the current instant by
//! fitting a least-squares polynomial over the window and evaluating it at
//! the newest timestamp.
//!
//! ## Design notes
//!
//! * **Causal evaluation**: The classic convolution-coefficient form of
//!   Savitzky-Golay assumes a uniform, odd-length window centered on the
//!   output point. A real-time sensor only has past samples and no spacing
//!   guarantee, so the general least-squares fit at the window's trailing
//!   edge is the always-applicable method.
//! * **Relative abscissas**: Callers pass timestamps relative to the newest
//!   sample (last element exactly 0), so the estimate is the constant
//!   coefficient of the fit and epoch-sized numbers never enter the normal
//!   equations.
//!
//! ## Key concepts
//!
//! * **Warm-up fallback**: Fewer than `order + 1` samples cannot determine
//!   the polynomial; the newest raw value is returned unchanged. This is the
//!   defined edge-case policy, not an error.
//! * **Solver fallback**: A degenerate fit (failed factorization or
//!   non-finite result) also returns the newest raw value rather than
//!   propagating garbage.
//!
//! ## Invariants
//!
//! * `compute` is a pure function of its inputs; repeated calls on an
//!   unchanged window are bit-identical.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial;
use crate::primitives::errors::SmoothError;

/// Savitzky-Golay polynomial-regression smoother.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavitzkyGolay {
    /// Polynomial degree, at least 1.
    pub order: usize,
}

impl SavitzkyGolay {
    /// Create a smoother with the given polynomial degree.
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Smoothed value at the newest timestamp.
    ///
    /// `rel_times` are timestamps relative to the newest sample, ascending,
    /// with the last element 0; `values` are the matching raw readings.
    pub fn compute<T: Float>(&self, rel_times: &[T], values: &[T]) -> Result<T, SmoothError> {
        let n = values.len();
        debug_assert_eq!(n, rel_times.len(), "compute: mismatched slice lengths");
        debug_assert!(n > 0, "compute: empty window");

        let newest = values[n - 1];

        // Warm-up: underdetermined fit, return the raw reading. Must trigger
        // strictly before attempting the fit.
        if n < self.order + 1 {
            return Ok(newest);
        }

        match polynomial::fit_at_origin(rel_times, values, self.order) {
            Some(v) => Ok(v),
            None => {
                log::warn!(
                    "savitzky-golay fit degenerate (n={}, order={}), passing raw value through",
                    n,
                    self.order
                );
                Ok(newest)
            }
        }
    }
}
