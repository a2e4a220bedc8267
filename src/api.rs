//! High-level API for building smoothed sensors.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the window span, algorithm, and fault bounds, and
//! a parsed-configuration struct mirroring the host's config surface.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the host's defaults for all
//!   parameters (order 2, lambda 20000, one second of history).
//! * **Validated**: Parameters are validated once, when `.build()` is
//!   called; the per-sample path never re-validates configuration.
//! * **Duplicate detection**: Setting the same parameter twice is reported
//!   at build time rather than silently keeping the last value.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Smoother`] via `Smoother::new()`.
//! 2. Chain configuration methods (`.smooth_time()`, `.savitzky_golay()`,
//!    `.min_temp()`, ...).
//! 3. Call `.build()` to obtain a [`SmoothedSensor`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::sensor::SmoothedSensor;
use crate::algorithms::filter::Filter;
use crate::algorithms::savgol::SavitzkyGolay;
use crate::algorithms::whittaker::WhittakerEilers;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::source::{EventCallback, FaultKind, SensorEvent, TemperatureSource};
pub use crate::primitives::errors::SmoothError;
pub use crate::primitives::sample::{Sample, SampleWindow};

/// Default window span, seconds.
const DEFAULT_SMOOTH_TIME: f64 = 1.0;

/// Default polynomial / penalty order.
const DEFAULT_ORDER: usize = 2;

/// Default Whittaker-Eilers penalty weight.
const DEFAULT_LAMBDA: f64 = 20_000.0;

/// Default lower fault bound: absolute zero.
const DEFAULT_MIN_TEMP: f64 = -273.15;

/// Default upper fault bound, matching the host's "effectively unbounded"
/// sentinel.
const DEFAULT_MAX_TEMP: f64 = 99_999_999.9;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Which smoothing algorithm a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Savitzky-Golay local polynomial regression.
    #[default]
    SavitzkyGolay,

    /// Whittaker-Eilers penalized least squares.
    WhittakerEilers,
}

// ============================================================================
// Parsed Configuration
// ============================================================================

/// The host's parsed configuration for one smoothed sensor.
///
/// Owned by the excluded config-loading glue and consumed here;
/// `sensor_name` identifies the raw sensor to wrap and is resolved by the
/// host, which injects the source via [`SmoothedSensor::attach`].
/// `smooth_lambda` is ignored by the Savitzky-Golay algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmootherConfig<T> {
    /// Name of the raw sensor to wrap.
    pub sensor_name: String,

    /// Window span, seconds.
    pub smooth_time: T,

    /// Lower fault bound, degrees Celsius.
    pub min_temp: T,

    /// Upper fault bound, degrees Celsius.
    pub max_temp: T,

    /// Polynomial degree (SG) or penalty order (WE).
    pub smooth_order: usize,

    /// Penalty weight (WE only).
    pub smooth_lambda: T,

    /// Selected algorithm.
    pub algorithm: Algorithm,
}

// ============================================================================
// Fluent Builder
// ============================================================================

/// Fluent builder for a [`SmoothedSensor`].
#[derive(Debug, Clone)]
pub struct Smoother<T> {
    smooth_time: Option<T>,
    min_temp: Option<T>,
    max_temp: Option<T>,
    algorithm: Option<Algorithm>,
    order: Option<usize>,
    lambda: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for Smoother<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Smoother<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            smooth_time: None,
            min_temp: None,
            max_temp: None,
            algorithm: None,
            order: None,
            lambda: None,
            duplicate_param: None,
        }
    }

    fn mark_duplicate(&mut self, was_set: bool, name: &'static str) {
        if was_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(name);
        }
    }

    /// Set the window span in seconds.
    pub fn smooth_time(mut self, seconds: T) -> Self {
        self.mark_duplicate(self.smooth_time.is_some(), "smooth_time");
        self.smooth_time = Some(seconds);
        self
    }

    /// Set the lower fault bound in degrees Celsius.
    pub fn min_temp(mut self, min_temp: T) -> Self {
        self.mark_duplicate(self.min_temp.is_some(), "min_temp");
        self.min_temp = Some(min_temp);
        self
    }

    /// Set the upper fault bound in degrees Celsius.
    pub fn max_temp(mut self, max_temp: T) -> Self {
        self.mark_duplicate(self.max_temp.is_some(), "max_temp");
        self.max_temp = Some(max_temp);
        self
    }

    /// Select Savitzky-Golay smoothing with the given polynomial degree.
    pub fn savitzky_golay(mut self, order: usize) -> Self {
        self.mark_duplicate(self.algorithm.is_some(), "algorithm");
        self.algorithm = Some(Algorithm::SavitzkyGolay);
        self.order = Some(order);
        self
    }

    /// Select Whittaker-Eilers smoothing with the given penalty order and
    /// weight.
    pub fn whittaker_eilers(mut self, order: usize, lambda: T) -> Self {
        self.mark_duplicate(self.algorithm.is_some(), "algorithm");
        self.algorithm = Some(Algorithm::WhittakerEilers);
        self.order = Some(order);
        self.lambda = Some(lambda);
        self
    }

    /// Validate the configuration and build the adapter.
    pub fn build(self) -> Result<SmoothedSensor<T>, SmoothError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let smooth_time = self
            .smooth_time
            .unwrap_or_else(|| T::from(DEFAULT_SMOOTH_TIME).unwrap());
        let min_temp = self
            .min_temp
            .unwrap_or_else(|| T::from(DEFAULT_MIN_TEMP).unwrap());
        let max_temp = self
            .max_temp
            .unwrap_or_else(|| T::from(DEFAULT_MAX_TEMP).unwrap());
        let order = self.order.unwrap_or(DEFAULT_ORDER);
        let lambda = self
            .lambda
            .unwrap_or_else(|| T::from(DEFAULT_LAMBDA).unwrap());
        let algorithm = self.algorithm.unwrap_or_default();

        Validator::validate_smooth_time(smooth_time)?;
        Validator::validate_bounds(min_temp, max_temp)?;
        Validator::validate_order(order)?;

        let filter = match algorithm {
            Algorithm::SavitzkyGolay => Filter::SavitzkyGolay(SavitzkyGolay::new(order)),
            Algorithm::WhittakerEilers => {
                Validator::validate_lambda(lambda)?;
                Filter::WhittakerEilers(WhittakerEilers::new(order, lambda))
            }
        };

        log::debug!(
            "building smoothed sensor: algorithm={:?}, order={}, smooth_time={}",
            algorithm,
            order,
            smooth_time.to_f64().unwrap_or(f64::NAN),
        );

        Ok(SmoothedSensor::from_parts(
            filter,
            smooth_time,
            min_temp,
            max_temp,
        ))
    }

    /// Build an adapter from the host's parsed configuration.
    pub fn from_config(config: &SmootherConfig<T>) -> Result<SmoothedSensor<T>, SmoothError> {
        let builder = Self::new()
            .smooth_time(config.smooth_time)
            .min_temp(config.min_temp)
            .max_temp(config.max_temp);

        let builder = match config.algorithm {
            Algorithm::SavitzkyGolay => builder.savitzky_golay(config.smooth_order),
            Algorithm::WhittakerEilers => {
                builder.whittaker_eilers(config.smooth_order, config.smooth_lambda)
            }
        };

        builder.build()
    }
}
