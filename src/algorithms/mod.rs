//! Layer 3: Algorithms
//!
//! This layer implements the two smoothing algorithms and their closed
//! selection enum. It contains the numerical core of the crate but is
//! orchestrated by the adapter layer.

// Savitzky-Golay local polynomial regression.
pub mod savgol;

// Whittaker-Eilers penalized least squares.
pub mod whittaker;

// Closed filter enumeration dispatching to either smoother.
pub mod filter;
