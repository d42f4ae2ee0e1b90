//! HVE-Core asset generators
//!
//! This library draws the documentation assets for the HVE-Core prompt
//! engineering framework: SVG diagrams of the RPI (Research, Plan,
//! Implement, Review) workflow, and PowerPoint decks that present it.
//!
//! # Features
//!
//! - **SVG diagrams**: The RPI pipeline, the D-RPI pipeline, the quality
//!   comparison and the role mapping, in a basic and an enhanced variant
//! - **Deck art**: The same drawings rasterized to PNG with resvg, in dark
//!   and light palettes
//! - **PPTX writer**: A small OOXML presentation writer with text boxes,
//!   preset shapes, connectors, pictures and speaker notes
//! - **Deterministic output**: Generating twice gives identical bytes
//!
//! # Example - Writing the diagrams
//!
//! ```no_run
//! use hve_assets::config::OutputConfig;
//! use hve_assets::diagrams::{self, Variant};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OutputConfig::default();
//! for diagram in diagrams::generate(Variant::Enhanced) {
//!     config.write_output(diagram.file_name, diagram.to_svg().as_bytes())?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a deck
//!
//! ```no_run
//! use hve_assets::config::OutputConfig;
//! use hve_assets::deck::{self, Deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = deck::generate(Deck::EnhancedLight, &OutputConfig::default())?;
//! println!("Saved presentation: {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - A slide by hand
//!
//! ```
//! use hve_assets::common::{Length, RGBColor};
//! use hve_assets::ooxml::pptx::MutablePresentation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut prs = MutablePresentation::new();
//! let slide = prs.add_slide();
//! slide.set_background(RGBColor::new(0x1B, 0x1B, 0x1B));
//! slide
//!     .add_text_box(
//!         Length::from_inches(0.8),
//!         Length::from_inches(0.5),
//!         Length::from_inches(10.0),
//!         Length::from_inches(0.7),
//!     )
//!     .add_text("The RPI Pipeline", 32.0, true, RGBColor::new(0xFF, 0xFF, 0xFF));
//! slide.set_notes("Each phase converts one form of understanding into the next.");
//! let bytes = prs.to_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```

/// Errors, colors, lengths and XML helpers
pub mod common;

/// Output directories shared by the binaries
pub mod config;

/// The HVE-Core slide decks
pub mod deck;

/// SVG diagrams and deck raster art
pub mod diagrams;

/// SVG building and rasterization
pub mod images;

/// OOXML package and presentation writer
pub mod ooxml;

pub use common::{Error, Result};
