//! Timestamped samples and the trailing-time-span window.
//!
//! ## Purpose
//!
//! This module provides the rolling history that every filter operates on: a
//! sequence of `(timestamp, value)` samples ordered by timestamp, trimmed to
//! the configured `smooth_time` span behind the newest sample.
//!
//! ## Design notes
//!
//! * **Storage**: `VecDeque`, pushed at the back, evicted at the front.
//! * **Ordering**: Callers are expected to push in non-decreasing timestamp
//!   order; a late sample is still inserted in sorted position rather than
//!   dropped, since both filters assume ordered abscissas.
//! * **Duplicates**: A push with a timestamp already present replaces that
//!   sample's value. The window never holds two samples with equal timestamps.
//! * **Defensive validation**: Non-finite timestamps or values are rejected
//!   here regardless of what the host sensor layer already checked.
//!
//! ## Invariants
//!
//! * Samples are strictly increasing in timestamp.
//! * Every retained sample is within `smooth_time` of the newest timestamp.
//! * The newest sample is always retained, even for `smooth_time == 0`.
//! * Once a sample has been accepted the window is never empty.
//!
//! ## Non-goals
//!
//! * This module does not smooth; it only curates history.
//! * This module does not enforce temperature bounds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

// ============================================================================
// Sample
// ============================================================================

/// A single timestamped sensor reading, immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Monotonic host time, seconds.
    pub timestamp: T,

    /// Temperature, degrees Celsius.
    pub value: T,
}

impl<T: Float> Sample<T> {
    /// Create a sample, rejecting non-finite components.
    pub fn new(timestamp: T, value: T) -> Result<Self, SmoothError> {
        if !timestamp.is_finite() {
            return Err(SmoothError::InvalidSample {
                name: "timestamp",
                value: timestamp.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !value.is_finite() {
            return Err(SmoothError::InvalidSample {
                name: "value",
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { timestamp, value })
    }
}

// ============================================================================
// Sample Window
// ============================================================================

/// Trailing-time-span window of raw readings.
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
    /// Retained span behind the newest timestamp, seconds.
    smooth_time: T,

    /// Samples ordered by timestamp ascending.
    samples: VecDeque<Sample<T>>,
}

impl<T: Float> SampleWindow<T> {
    /// Create an empty window retaining `smooth_time` seconds of history.
    pub fn new(smooth_time: T) -> Self {
        Self {
            smooth_time,
            samples: VecDeque::new(),
        }
    }

    /// Insert a sample in timestamp order and evict stale history.
    ///
    /// Rejects non-finite components with [`SmoothError::InvalidSample`],
    /// leaving the window untouched. A sample whose timestamp equals an
    /// existing one replaces the stored value.
    pub fn push(&mut self, sample: Sample<T>) -> Result<(), SmoothError> {
        // Re-validate even pre-built samples; the filters must never see
        // a NaN.
        let sample = Sample::new(sample.timestamp, sample.value)?;

        // Common case: append at the back.
        let mut idx = self.samples.len();
        while idx > 0 && self.samples[idx - 1].timestamp > sample.timestamp {
            idx -= 1;
        }

        if idx > 0 && self.samples[idx - 1].timestamp == sample.timestamp {
            self.samples[idx - 1] = sample;
        } else {
            self.samples.insert(idx, sample);
        }

        self.evict();
        Ok(())
    }

    /// Drop samples older than `newest - smooth_time`, keeping the newest.
    fn evict(&mut self) {
        let newest = match self.samples.back() {
            Some(s) => s.timestamp,
            None => return,
        };

        while self.samples.len() > 1 {
            let oldest = self.samples[0].timestamp;
            if newest - oldest > self.smooth_time {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Iterate over the retained samples, oldest first. Pure read.
    pub fn samples(&self) -> impl Iterator<Item = &Sample<T>> {
        self.samples.iter()
    }

    /// The most recent sample, if any.
    pub fn newest(&self) -> Option<&Sample<T>> {
        self.samples.back()
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Configured retention span, seconds.
    pub fn smooth_time(&self) -> T {
        self.smooth_time
    }

    /// Discard all history.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
