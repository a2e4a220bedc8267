//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks used by the filters:
//! - Least-squares polynomial fitting (normal equations + dense Cholesky)
//! - Symmetric banded matrices with a banded Cholesky solver
//! - Uniform-spacing detection and linear-interpolation resampling
//!
//! These are reusable numerical routines with no sensor-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial least-squares fitting evaluated at the origin.
pub mod polynomial;

/// Symmetric banded matrices and banded Cholesky.
pub mod banded;

/// Uniform-grid detection and resampling.
pub mod grid;
