//! Common types, traits, and utilities shared across the generators.
//!
//! This module provides the unified error type, colors, lengths and XML
//! helpers used by both the SVG diagram generators and the PPTX writer.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
