//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;

impl From<crate::ooxml::OoxmlError> for Error {
    fn from(err: crate::ooxml::OoxmlError) -> Self {
        match err {
            crate::ooxml::OoxmlError::Io(e) => Error::Io(e),
            crate::ooxml::OoxmlError::Xml(s) => Error::XmlError(s),
            crate::ooxml::OoxmlError::Zip(s) => Error::ZipError(s),
            crate::ooxml::OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            crate::ooxml::OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

impl From<crate::images::RasterError> for Error {
    fn from(err: crate::images::RasterError) -> Self {
        Error::RasterError(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ooxml_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err: Error = crate::ooxml::OoxmlError::Io(io).into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_raster_error_conversion() {
        let err: Error = crate::images::RasterError::SvgParse.into();
        assert_eq!(err.to_string(), "Raster error: failed to parse SVG");
    }
}
