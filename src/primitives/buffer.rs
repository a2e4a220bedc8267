//! Reusable scratch buffers for per-sample smoothing.
//!
//! ## Purpose
//!
//! The adapter runs one filter evaluation per raw reading inside the host's
//! bounded callback budget. This module provides a reusable workspace that
//! turns the current window into the contiguous slices the filters consume,
//! without allocating on every sample.
//!
//! ## Design notes
//!
//! * **Relative abscissas**: Timestamps are shifted so the newest sample sits
//!   at 0. The filters always evaluate at the origin, and large epoch
//!   timestamps never reach the normal equations.
//! * **Lazy growth**: Vectors are cleared, never shrunk; capacity stabilizes
//!   at the largest window seen.
//!
//! ## Invariants
//!
//! * After `load`, `rel_times` and `values` have equal length, `rel_times` is
//!   ascending, and its last element is exactly zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::SampleWindow;

/// Scratch space holding the window as filter-ready slices.
#[derive(Debug, Clone, Default)]
pub struct WindowBuffer<T> {
    /// Timestamps relative to the newest sample (non-positive, ascending).
    pub rel_times: Vec<T>,

    /// Raw values in the same order.
    pub values: Vec<T>,
}

impl<T: Float> WindowBuffer<T> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            rel_times: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Fill the buffer from the window. Repeatable between pushes.
    pub fn load(&mut self, window: &SampleWindow<T>) {
        self.rel_times.clear();
        self.values.clear();

        let newest = match window.newest() {
            Some(s) => s.timestamp,
            None => return,
        };

        for sample in window.samples() {
            self.rel_times.push(sample.timestamp - newest);
            self.values.push(sample.value);
        }
    }

    /// Number of loaded samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
