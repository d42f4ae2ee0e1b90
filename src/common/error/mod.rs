//! Unified error types for the asset generators.
//!
//! This module provides a unified error type that encompasses errors from the
//! presentation writer and the rasterizer, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
