//! PowerPoint (.pptx) presentation writing.
//!
//! Decks are built in memory with [`MutablePresentation`], one
//! [`MutableSlide`] at a time, and serialized in a single pass. Each slide
//! holds absolutely positioned shapes:
//!
//! - text boxes and preset auto shapes carrying formatted paragraphs
//! - straight connectors
//! - pictures (PNG, JPEG, GIF)
//!
//! Speaker notes become notes slides linked to a shared notes master.

pub mod format;
pub mod template;
pub mod writer;

pub use format::{AutoShapeType, ImageFormat, TextAlign, TextParagraph, TextRun, VerticalAnchor};
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
