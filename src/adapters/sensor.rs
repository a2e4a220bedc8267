//! The smoothed-sensor adapter.
//!
//! ## Purpose
//!
//! This module bridges one raw temperature source to the host: every raw
//! reading is pushed into the sample window, the configured filter produces a
//! smoothed value for the same timestamp, and the result is republished
//! through the identical event contract the raw sensor uses. Faults pass
//! through untouched; smoothing never papers over a broken sensor.
//!
//! ## Design notes
//!
//! * **Synchronous**: `on_reading` does all work inline and returns before
//!   the host loop proceeds. No timers, no deferred computation.
//! * **Scratch reuse**: The window is converted to filter slices through a
//!   reusable [`WindowBuffer`], so the steady-state path does not allocate.
//! * **Range enforcement**: A smoothed value outside `[min_temp, max_temp]`
//!   is published downstream as an `OutOfRange` fault and returned as an
//!   error, exactly as a raw-sensor range fault would be. It is never
//!   clamped.
//!
//! ## Key concepts
//!
//! * **Same contract both sides**: `SmoothedSensor` implements
//!   [`TemperatureSource`] itself, so the host cannot tell it from a raw
//!   sensor, and smoothed sensors could even be stacked.
//! * **Wiring**: [`SmoothedSensor::attach`] subscribes a forwarding closure
//!   on the upstream source; the adapter is shared via `Rc<RefCell<..>>`
//!   because the whole pipeline runs on the host's single callback thread.
//!
//! ## Invariants
//!
//! * A fault event never mutates the window.
//! * Errors surface synchronously from the triggering call; nothing is
//!   retried internally (a retry would recompute the same result).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::rc::Rc;

// External dependencies
use core::cell::RefCell;
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::adapters::source::{EventCallback, FaultKind, SensorEvent, TemperatureSource};
use crate::algorithms::filter::Filter;
use crate::primitives::buffer::WindowBuffer;
use crate::primitives::errors::SmoothError;
use crate::primitives::sample::{Sample, SampleWindow};

// ============================================================================
// Smoothed Sensor
// ============================================================================

/// Synthetic sensor republishing filtered readings of a raw source.
pub struct SmoothedSensor<T: Float> {
    filter: Filter<T>,
    window: SampleWindow<T>,
    buffer: WindowBuffer<T>,
    min_temp: T,
    max_temp: T,
    callback: Option<EventCallback<T>>,
    last_reading: Option<Sample<T>>,
    last_fault: Option<FaultKind<T>>,
}

impl<T: Float> SmoothedSensor<T> {
    /// Assemble an adapter from already-validated parts. Use the builder in
    /// [`crate::api`] to construct one from configuration.
    pub(crate) fn from_parts(filter: Filter<T>, smooth_time: T, min_temp: T, max_temp: T) -> Self {
        Self {
            filter,
            window: SampleWindow::new(smooth_time),
            buffer: WindowBuffer::new(),
            min_temp,
            max_temp,
            callback: None,
            last_reading: None,
            last_fault: None,
        }
    }

    /// Ingest one raw reading and republish the smoothed result.
    ///
    /// Pushes the reading into the window, runs the configured filter at the
    /// newest timestamp, enforces the temperature range, and invokes the
    /// downstream callback with the outcome. Returns the smoothed sample, or
    /// the error that was simultaneously published as a fault.
    pub fn on_reading(&mut self, timestamp: T, value: T) -> Result<Sample<T>, SmoothError> {
        let sample = match Sample::new(timestamp, value) {
            Ok(s) => s,
            Err(e) => {
                // The window stays untouched; tell the host the reading was
                // unusable instead of silently skipping it.
                self.last_fault = Some(FaultKind::InvalidReading);
                self.publish(SensorEvent::Fault(FaultKind::InvalidReading));
                return Err(e);
            }
        };

        self.window.push(sample)?;
        self.buffer.load(&self.window);

        let smoothed = self
            .filter
            .compute(&self.buffer.rel_times, &self.buffer.values)?;

        // The window may have re-sorted a late sample; report at the newest
        // timestamp, which is what the filter estimated.
        let newest_ts = self
            .window
            .newest()
            .map(|s| s.timestamp)
            .unwrap_or(timestamp);

        if smoothed < self.min_temp || smoothed > self.max_temp {
            let fault = FaultKind::OutOfRange {
                value: smoothed,
                min: self.min_temp,
                max: self.max_temp,
            };
            log::warn!(
                "smoothed temperature {} outside [{}, {}]",
                smoothed.to_f64().unwrap_or(f64::NAN),
                self.min_temp.to_f64().unwrap_or(f64::NAN),
                self.max_temp.to_f64().unwrap_or(f64::NAN),
            );
            self.last_fault = Some(fault);
            self.publish(SensorEvent::Fault(fault));
            return Err(SmoothError::OutOfRange {
                value: smoothed.to_f64().unwrap_or(f64::NAN),
                min: self.min_temp.to_f64().unwrap_or(f64::NAN),
                max: self.max_temp.to_f64().unwrap_or(f64::NAN),
            });
        }

        let reading = Sample {
            timestamp: newest_ts,
            value: smoothed,
        };
        self.last_reading = Some(reading);
        self.publish(SensorEvent::Reading(reading));
        Ok(reading)
    }

    /// Propagate an upstream fault unmodified. The window is left as-is; a
    /// fault carries no sample to smooth over.
    pub fn on_fault(&mut self, fault: FaultKind<T>) {
        log::warn!("propagating upstream sensor fault");
        self.last_fault = Some(fault);
        self.publish(SensorEvent::Fault(fault));
    }

    /// Dispatch one upstream event. Used by [`SmoothedSensor::attach`];
    /// hosts driving the adapter directly may prefer [`Self::on_reading`]
    /// and [`Self::on_fault`] for their richer return types.
    pub fn handle_event(&mut self, event: SensorEvent<T>) -> Result<(), SmoothError> {
        match event {
            SensorEvent::Reading(sample) => {
                self.on_reading(sample.timestamp, sample.value)?;
                Ok(())
            }
            SensorEvent::Fault(fault) => {
                self.on_fault(fault);
                Ok(())
            }
        }
    }

    /// Discard history and fault state, e.g. after the upstream sensor was
    /// reconfigured.
    pub fn reset(&mut self) {
        self.window.clear();
        self.last_reading = None;
        self.last_fault = None;
    }

    /// Number of samples currently retained.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// The configured fault-reporting range.
    pub fn bounds(&self) -> (T, T) {
        (self.min_temp, self.max_temp)
    }

    fn publish(&mut self, event: SensorEvent<T>) {
        if let Some(cb) = self.callback.as_mut() {
            cb(event);
        }
    }
}

impl<T: Float + 'static> SmoothedSensor<T> {
    /// Wire the adapter to its upstream source.
    ///
    /// Subscribes a closure forwarding every upstream event into
    /// [`Self::handle_event`]. Errors are already republished downstream as
    /// fault events by the handlers, so the closure drops the `Result`.
    pub fn attach(this: Rc<RefCell<Self>>, source: &mut dyn TemperatureSource<T>) {
        source.subscribe(Box::new(move |event| {
            let _ = this.borrow_mut().handle_event(event);
        }));
    }
}

// The subscriber callback is an opaque boxed closure, so `Debug` is written
// by hand over the inspectable state.
impl<T: Float + fmt::Debug> fmt::Debug for SmoothedSensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothedSensor")
            .field("filter", &self.filter)
            .field("window", &self.window)
            .field("min_temp", &self.min_temp)
            .field("max_temp", &self.max_temp)
            .field("last_reading", &self.last_reading)
            .field("last_fault", &self.last_fault)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TemperatureSource Implementation
// ============================================================================

impl<T: Float> TemperatureSource<T> for SmoothedSensor<T> {
    fn subscribe(&mut self, callback: EventCallback<T>) {
        self.callback = Some(callback);
    }

    fn current(&self) -> Option<Sample<T>> {
        self.last_reading
    }

    fn fault(&self) -> Option<FaultKind<T>> {
        self.last_fault
    }
}
