//! XML text helpers shared by the SVG and PresentationML writers.

pub mod escape;

pub use escape::escape_xml;
