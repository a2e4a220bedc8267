//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts the numerical core to the host's sensor model:
//!
//! - **Source**: The event contract every temperature sensor exposes
//! - **Sensor**: The smoothed-sensor adapter bridging a raw source to the host
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The temperature-source event contract.
pub mod source;

/// The smoothed-sensor adapter.
pub mod sensor;
