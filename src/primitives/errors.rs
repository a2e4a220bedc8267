//! Error types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while feeding samples
//! into the window, computing a smoothed value, or building a smoother from
//! configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   reading and the configured bounds).
//! * **No-std**: Supports `no_std` environments; variants avoid heap-allocated
//!   messages entirely.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Sample validation**: Non-finite timestamps or values are rejected
//!    before they can reach a filter.
//! 2. **Range enforcement**: A smoothed value outside the configured bounds is
//!    a fault, never a clamp.
//! 3. **Configuration validation**: Invalid order, lambda, window span, or
//!    bounds are caught at build time.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Warm-up (too few samples for the requested fit) is a defined fallback
//!   policy, not an error, and has no variant here.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide retry or recovery strategies.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothError {
    /// A raw reading carried a NaN or infinite component.
    InvalidSample {
        /// Which component was non-finite ("timestamp" or "value").
        name: &'static str,
        /// The offending value, as `f64`.
        value: f64,
    },

    /// The smoothed value left the configured temperature range.
    OutOfRange {
        /// The smoothed value that violated the range.
        value: f64,
        /// Lower bound of the allowed range.
        min: f64,
        /// Upper bound of the allowed range.
        max: f64,
    },

    /// The linear solve produced a non-finite result or failed to factorize.
    ///
    /// Unreachable for a well-formed penalized system (`I +` regularization
    /// keeps it positive-definite); detected defensively.
    SolverFailure,

    /// Polynomial or penalty order must be at least 1.
    InvalidOrder(usize),

    /// Whittaker-Eilers lambda must be finite and non-negative.
    InvalidLambda(f64),

    /// Window span must be positive and finite.
    InvalidSmoothTime(f64),

    /// Temperature bounds must be finite with `min < max`.
    InvalidBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidSample { name, value } => {
                write!(f, "Invalid sample: {name}={value} is not finite")
            }
            Self::OutOfRange { value, min, max } => {
                write!(
                    f,
                    "Smoothed temperature {value} outside allowed range [{min}, {max}]"
                )
            }
            Self::SolverFailure => write!(f, "Linear solve produced a non-finite result"),
            Self::InvalidOrder(order) => {
                write!(f, "Invalid order: {order} (must be at least 1)")
            }
            Self::InvalidLambda(lambda) => {
                write!(f, "Invalid lambda: {lambda} (must be finite and >= 0)")
            }
            Self::InvalidSmoothTime(span) => {
                write!(f, "Invalid smooth_time: {span} (must be finite and > 0)")
            }
            Self::InvalidBounds { min, max } => {
                write!(f, "Invalid bounds: min {min} must be below max {max}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmoothError {}
