//! Input validation for smoother configuration and readings.
//!
//! ## Purpose
//!
//! This module provides validation for configuration parameters and
//! incoming scalars. It checks requirements such as finite values, positive
//! window spans, and ordered temperature bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Build-time**: Configuration is validated once when the smoother is
//!   built; the per-sample path only re-checks finiteness.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform the smoothing itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother configuration and input data.
///
/// Provides static methods returning `Result<(), SmoothError>`, failing fast
/// on the first violation.
pub struct Validator;

impl Validator {
    /// Validate a polynomial or penalty order.
    pub fn validate_order(order: usize) -> Result<(), SmoothError> {
        if order < 1 {
            return Err(SmoothError::InvalidOrder(order));
        }
        Ok(())
    }

    /// Validate the Whittaker-Eilers penalty weight.
    ///
    /// Zero is allowed: no penalty degenerates to the identity, which is a
    /// defined (if pointless) configuration.
    pub fn validate_lambda<T: Float>(lambda: T) -> Result<(), SmoothError> {
        if !lambda.is_finite() || lambda < T::zero() {
            return Err(SmoothError::InvalidLambda(
                lambda.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the window retention span.
    pub fn validate_smooth_time<T: Float>(smooth_time: T) -> Result<(), SmoothError> {
        if !smooth_time.is_finite() || smooth_time <= T::zero() {
            return Err(SmoothError::InvalidSmoothTime(
                smooth_time.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the fault-reporting temperature range.
    pub fn validate_bounds<T: Float>(min_temp: T, max_temp: T) -> Result<(), SmoothError> {
        if !min_temp.is_finite() || !max_temp.is_finite() || min_temp >= max_temp {
            return Err(SmoothError::InvalidBounds {
                min: min_temp.to_f64().unwrap_or(f64::NAN),
                max: max_temp.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmoothError> {
        if let Some(parameter) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
