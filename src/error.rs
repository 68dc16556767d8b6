//! Error types for the disease scraper
//!
//! This module provides the error hierarchy used across the fetch,
//! extraction and export stages, built with `thiserror`.

use thiserror::Error;

/// The main error type for scraper operations
#[derive(Error, Debug)]
pub enum Error {
    /// Page retrieval errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// HTML extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Tabular export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Page retrieval errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL could not be parsed or resolved
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Server answered with a non-success status
    #[error("HTTP error {status} for {url}")]
    HttpError {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Connection-level failure
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request did not complete in time
    #[error("Request to {url} timed out after {ms}ms")]
    Timeout {
        /// Requested URL
        url: String,
        /// Configured timeout
        ms: u64,
    },

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    BodyFailed(String),
}

/// HTML extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A CSS selector failed to compile
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// An FAQ block lacks its question or its answer
    #[error("FAQ block {index} has no {missing}")]
    MalformedFaq {
        /// Position of the block among the page's FAQ blocks
        index: usize,
        /// Which part is absent ("question" or "answer")
        missing: &'static str,
    },
}

/// Tabular export errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// A row's keys differ from the header taken from the first row
    #[error("Row {row} does not match the header: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        /// Zero-based row index
        row: usize,
        /// Header keys
        expected: Vec<String>,
        /// Keys of the offending row
        found: Vec<String>,
    },
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a configuration error from a string
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Fetch(FetchError::HttpError { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = Error::Fetch(FetchError::HttpError {
            status: 404,
            url: "https://example.com/all-diseases".to_string(),
        });
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("all-diseases"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_timeout_error() {
        let err = FetchError::Timeout {
            url: "https://example.com".to_string(),
            ms: 500,
        };
        assert_eq!(
            err.to_string(),
            "Request to https://example.com timed out after 500ms"
        );
        assert_eq!(Error::from(err).status(), None);
    }

    #[test]
    fn test_malformed_faq() {
        let err = ExtractionError::MalformedFaq {
            index: 2,
            missing: "answer",
        };
        assert_eq!(err.to_string(), "FAQ block 2 has no answer");
    }

    #[test]
    fn test_schema_mismatch() {
        let err = ExportError::SchemaMismatch {
            row: 1,
            expected: vec!["Disease Name".to_string()],
            found: vec!["Name".to_string()],
        };
        assert!(err.to_string().contains("Row 1"));
        assert!(err.to_string().contains("\"Name\""));
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
