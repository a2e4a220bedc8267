//! Uniform-grid detection and resampling for irregular timestamps.
//!
//! ## Purpose
//!
//! The discrete difference penalty assumes evenly spaced abscissas. Sensor
//! timestamps usually are evenly spaced (the host polls on a fixed cadence)
//! but jitter and event-driven reads break that guarantee. This module
//! detects uniform spacing and, when spacing is irregular, resamples the
//! window onto a uniform grid by linear interpolation so the penalty stays
//! meaningful instead of silently degrading.
//!
//! ## Design notes
//!
//! * **Policy**: Resampling (not operator reweighting) is the documented
//!   choice for irregular spacing. The grid spans `[x[0], x[n-1]]` with the
//!   same point count, so the last grid point coincides with the newest
//!   timestamp and the last solution element still answers "now".
//! * **Tolerance**: Spacing within `1e-6` of the mean step, relatively, is
//!   treated as uniform; below that, interpolation would only reproduce the
//!   input to rounding error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Whether consecutive gaps in sorted `x` all match the mean gap within
/// `rel_tol` (relative). Slices shorter than 3 are trivially uniform.
pub fn is_uniform<T: Float>(x: &[T], rel_tol: T) -> bool {
    let n = x.len();
    if n < 3 {
        return true;
    }

    let span = x[n - 1] - x[0];
    let mean = span / T::from(n - 1).unwrap();
    if mean <= T::zero() {
        return true;
    }

    let tol = rel_tol * mean;
    for i in 0..n - 1 {
        let dt = x[i + 1] - x[i];
        if (dt - mean).abs() > tol {
            return false;
        }
    }
    true
}

/// Linearly interpolate `(x, y)` onto a uniform grid over `[x[0], x[n-1]]`
/// with the same number of points, appending the values to `out`.
///
/// `x` must be sorted ascending with distinct endpoints.
pub fn resample_uniform<T: Float>(x: &[T], y: &[T], out: &mut Vec<T>) {
    let n = x.len();
    debug_assert_eq!(n, y.len(), "resample_uniform: mismatched slice lengths");
    debug_assert!(n >= 2, "resample_uniform: need at least two points");

    out.clear();
    out.reserve(n);

    let step = (x[n - 1] - x[0]) / T::from(n - 1).unwrap();
    let mut seg = 0usize;

    for i in 0..n {
        // Endpoints are reproduced exactly.
        if i == 0 {
            out.push(y[0]);
            continue;
        }
        if i == n - 1 {
            out.push(y[n - 1]);
            continue;
        }

        let g = x[0] + step * T::from(i).unwrap();
        while seg + 2 < n && x[seg + 1] < g {
            seg += 1;
        }

        let x0 = x[seg];
        let x1 = x[seg + 1];
        let w = if x1 > x0 {
            (g - x0) / (x1 - x0)
        } else {
            T::zero()
        };
        out.push(y[seg] + (y[seg + 1] - y[seg]) * w);
    }
}
