//! Filter selection as a closed tagged variant.
//!
//! The two smoothing algorithms are interchangeable at adapter-construction
//! time and share one `compute` contract, so they form a closed enumeration
//! rather than a trait hierarchy. Each variant stays independently testable
//! through its own module.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::savgol::SavitzkyGolay;
use crate::algorithms::whittaker::WhittakerEilers;
use crate::primitives::errors::SmoothError;

/// Smoothing algorithm selected from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter<T> {
    /// Local polynomial regression evaluated at the newest sample.
    SavitzkyGolay(SavitzkyGolay),

    /// Global penalized-least-squares smoothing over the whole window.
    WhittakerEilers(WhittakerEilers<T>),
}

impl<T: Float> Filter<T> {
    /// Smoothed value at the newest timestamp.
    ///
    /// `rel_times` are timestamps relative to the newest sample (last
    /// element 0); `values` are the matching raw readings.
    pub fn compute(&self, rel_times: &[T], values: &[T]) -> Result<T, SmoothError> {
        match self {
            Self::SavitzkyGolay(sg) => sg.compute(rel_times, values),
            Self::WhittakerEilers(we) => we.compute(rel_times, values),
        }
    }

    /// The configured order (polynomial degree or penalty order).
    pub fn order(&self) -> usize {
        match self {
            Self::SavitzkyGolay(sg) => sg.order,
            Self::WhittakerEilers(we) => we.order,
        }
    }
}
