//! The temperature-source contract shared by raw and smoothed sensors.
//!
//! ## Purpose
//!
//! The host control loop polls temperature sensors through one callback
//! contract, whatever their kind. This module defines that contract as a
//! capability set (`subscribe` + current value + fault state) so a smoothed
//! sensor is indistinguishable from the raw sensor it wraps, with no runtime
//! type inspection anywhere.
//!
//! ## Design notes
//!
//! * **Events, not polling**: A source delivers either a reading or a fault;
//!   there is no separate fault channel to forget to wire up.
//! * **Single-threaded**: Callbacks are invoked synchronously from the host's
//!   control-loop context and must return before the loop proceeds. `FnMut`
//!   boxes suffice; no `Send` bound, no locking.
//! * **Injection over registries**: Sources are handed to subscribers
//!   explicitly. Name-based lookup belongs to the excluded host glue.
//!
//! ## Non-goals
//!
//! * Sensor hardware drivers and calibration live upstream.
//! * No cadence control; the source decides when events fire.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Sample;

// ============================================================================
// Events
// ============================================================================

/// Fault conditions a sensor can report instead of a reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaultKind<T> {
    /// The upstream sensor stopped responding.
    Disconnected,

    /// The upstream sensor produced an unusable reading.
    InvalidReading,

    /// A reported temperature left the configured range.
    OutOfRange {
        /// The value that violated the range.
        value: T,
        /// Lower bound of the allowed range.
        min: T,
        /// Upper bound of the allowed range.
        max: T,
    },
}

/// One synchronous delivery from a temperature source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent<T> {
    /// A timestamped temperature reading.
    Reading(Sample<T>),

    /// A fault reported in place of a reading.
    Fault(FaultKind<T>),
}

/// Boxed subscriber callback, invoked synchronously per event.
pub type EventCallback<T> = Box<dyn FnMut(SensorEvent<T>)>;

// ============================================================================
// Source Trait
// ============================================================================

/// Capability set every temperature sensor exposes to the host.
pub trait TemperatureSource<T: Float> {
    /// Register the downstream callback. One subscriber per source; a second
    /// call replaces the first.
    fn subscribe(&mut self, callback: EventCallback<T>);

    /// The most recent reading delivered, if any.
    fn current(&self) -> Option<Sample<T>>;

    /// The most recent fault reported, if any.
    fn fault(&self) -> Option<FaultKind<T>>;
}
