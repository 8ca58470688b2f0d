//! Dataset loader error types
//!
//! Every variant is fatal at startup: the server does not bind until the
//! launch table has loaded cleanly.

use thiserror::Error;

/// Errors that can occur while fetching or parsing the launch table
#[derive(Error, Debug)]
pub enum DatasetError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote source answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing or header error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but violates the record invariants
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// The table has no rows, so payload extrema are undefined
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::InvalidRecord {
            line: 4,
            reason: "class must be 0 or 1, got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid record on line 4: class must be 0 or 1, got 2"
        );

        let err = DatasetError::Status {
            url: "http://example.invalid/data.csv".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 from http://example.invalid/data.csv"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
