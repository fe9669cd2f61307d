//! Error types for the deckwright library.

use std::io;
use thiserror::Error;

/// Result type alias for deckwright operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, writing or reading a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data in the package.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// The slide layout does not provide the requested placeholder.
    #[error("Layout '{layout}' has no {kind} placeholder")]
    MissingPlaceholder {
        /// Layout name
        layout: String,
        /// Placeholder kind that was looked up
        kind: String,
    },

    /// A slide index outside the slide collection.
    #[error("Slide index out of range: {0}")]
    SlideIndex(usize),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingPlaceholder {
            layout: "Blank".to_string(),
            kind: "title".to_string(),
        };
        assert_eq!(err.to_string(), "Layout 'Blank' has no title placeholder");

        let err = Error::SlideIndex(12);
        assert_eq!(err.to_string(), "Slide index out of range: 12");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
