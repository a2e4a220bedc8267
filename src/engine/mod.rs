//! Layer 4: Engine
//!
//! This layer holds the cross-cutting orchestration utilities shared by the
//! adapter and API layers. For a per-sample smoother that is exactly one
//! concern: fail-fast validation of configuration and incoming scalars.

/// Validation utilities.
pub mod validator;
