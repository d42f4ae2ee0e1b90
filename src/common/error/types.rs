//! Unified error types for the asset generators.
use thiserror::Error;

/// Main error type for asset generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// SVG rasterization error
    #[error("Raster error: {0}")]
    RasterError(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for asset generation.
pub type Result<T> = std::result::Result<T, Error>;
