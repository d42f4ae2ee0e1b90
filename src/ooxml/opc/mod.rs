/// Open Packaging Conventions (OPC) writing.
///
/// This module provides the package-level pieces of an Office Open XML file:
///
/// - Content type management (`[Content_Types].xml`)
/// - Relationships (`_rels/*.rels`)
/// - ZIP-based physical packaging with fixed entry timestamps
pub mod constants;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
