//! Common style types.
//!
//! This module provides the color and length types used by both the SVG
//! builder and the presentation writer.

// Submodule declarations
pub mod color;
pub mod len;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
