//! Office Open XML (OOXML) writing.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package structure (ZIP container, content types,
//!    relationships)
//! 2. **PresentationML** (`pptx`): slides, shapes, notes and the fixed
//!    master/layout/theme parts a deck needs to open in PowerPoint
//!
//! # Example
//!
//! ```rust,no_run
//! use hve_assets::common::{Length, RGBColor};
//! use hve_assets::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(RGBColor::new(0x1B, 0x1B, 0x1B));
//! slide
//!     .add_text_box(
//!         Length::from_inches(0.8),
//!         Length::from_inches(0.5),
//!         Length::from_inches(11.0),
//!         Length::from_inches(0.8),
//!     )
//!     .add_text("The RPI Pipeline", 32.0, true, RGBColor::new(255, 255, 255));
//! pres.save("deck.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
