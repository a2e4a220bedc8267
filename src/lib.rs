//! # tempsmooth — real-time smoothing for temperature sensors
//!
//! Noisy periodic temperature readings go in; a numerically stable, bounded,
//! cheap-to-recompute smoothed value comes out, through the same sensor
//! contract the raw reading used. The crate buffers a rolling
//! `(timestamp, value)` history over a configurable time span and offers two
//! interchangeable smoothing algorithms:
//!
//! * **Savitzky-Golay**: local least-squares polynomial regression evaluated
//!   at the newest sample. Causal (past samples only) and correct for
//!   irregular spacing, unlike the classic precomputed-kernel form.
//! * **Whittaker-Eilers**: global penalized least squares over the whole
//!   window, solving `(I + lambda * D^T D) z = y` with a banded Cholesky
//!   solver. Less sensitive to a single outlier dominating the local fit.
//!
//! The smoothed sensor is meant to sit inside a host control loop that uses
//! temperature for safety limits and closed-loop control: everything runs
//! synchronously in the host's callback context, out-of-range smoothed
//! values are reported as faults (never clamped), and upstream faults pass
//! through unmodified.
//!
//! ## Quick Start
//!
//! ```rust
//! use tempsmooth::prelude::*;
//!
//! let mut sensor = Smoother::new()
//!     .smooth_time(2.0)        // retain two seconds of history
//!     .savitzky_golay(2)       // quadratic local fit
//!     .min_temp(0.0)
//!     .max_temp(300.0)
//!     .build()?;
//!
//! // Warm-up: a lone sample passes through unchanged.
//! let reading = sensor.on_reading(0.0, 21.2)?;
//! assert_eq!(reading.value, 21.2);
//!
//! // Subsequent readings are smoothed over the window.
//! sensor.on_reading(0.3, 21.6)?;
//! let reading = sensor.on_reading(0.6, 21.4)?;
//! assert!(reading.value > 21.0 && reading.value < 22.0);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! Selecting Whittaker-Eilers instead:
//!
//! ```rust
//! use tempsmooth::prelude::*;
//!
//! let sensor = Smoother::new()
//!     .smooth_time(5.0)
//!     .whittaker_eilers(2, 20_000.0)
//!     .build()?;
//! # let _ = sensor;
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Errors and faults
//!
//! Per-sample calls return `Result<Sample<T>, SmoothError>`. Non-finite
//! readings are rejected (`InvalidSample`) without touching the window; a
//! smoothed value outside the configured range surfaces as `OutOfRange` and
//! is simultaneously published downstream as a fault event. Too little
//! history for the requested fit is not an error: the newest raw value
//! passes through until the window has warmed up.
//!
//! ## no_std
//!
//! The crate supports `no_std` targets with `alloc`:
//!
//! ```toml
//! [dependencies]
//! tempsmooth = { version = "0.1", default-features = false, features = ["libm"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - samples, windows, errors, buffers.
pub mod primitives;

// Layer 2: Math - pure numerical routines.
pub mod math;

// Layer 3: Algorithms - the two smoothers and their selection enum.
pub mod algorithms;

// Layer 4: Engine - validation.
pub mod engine;

// Layer 5: Adapters - the sensor contract and the smoothed-sensor bridge.
pub mod adapters;

// High-level fluent API.
pub mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::adapters::sensor::SmoothedSensor;
    pub use crate::adapters::source::{EventCallback, FaultKind, SensorEvent, TemperatureSource};
    pub use crate::algorithms::filter::Filter;
    pub use crate::algorithms::savgol::SavitzkyGolay;
    pub use crate::algorithms::whittaker::WhittakerEilers;
    pub use crate::api::{Algorithm, Smoother, SmootherConfig};
    pub use crate::primitives::errors::SmoothError;
    pub use crate::primitives::sample::{Sample, SampleWindow};
}
