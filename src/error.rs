//! Error types for the HEX codec.

use std::io;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, IhexError>;

/// Errors that can occur while encoding or decoding record streams.
///
/// Checksum mismatches are deliberately absent: they are non-fatal and are
/// reported through [`ChecksumWarning`](crate::ChecksumWarning) entries in the
/// decode summary instead of aborting the session.
#[derive(Debug, Error)]
pub enum IhexError {
    /// Invalid parameter provided.
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        parameter: String,
        /// Description of why the parameter is invalid.
        reason: String,
    },

    /// A record line that cannot be framed or parsed. Fatal to the session.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based input line number where parsing failed.
        line: usize,
        /// Description of the framing/parse failure.
        reason: String,
    },

    /// I/O error from the underlying source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IhexError {
    /// Creates a new `InvalidParameter` error.
    ///
    /// # Example
    ///
    /// ```
    /// use bin2ihex::IhexError;
    ///
    /// let err = IhexError::invalid_parameter("width", "must be greater than 0");
    /// ```
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new `MalformedRecord` error at the given 1-based line.
    ///
    /// # Example
    ///
    /// ```
    /// use bin2ihex::IhexError;
    ///
    /// let err = IhexError::malformed_record(3, "expected ':' record marker");
    /// ```
    pub fn malformed_record(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = IhexError::invalid_parameter("width", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width': must be greater than 0"
        );
    }

    #[test]
    fn test_malformed_record_display() {
        let err = IhexError::malformed_record(7, "expected ':' record marker");
        assert_eq!(
            err.to_string(),
            "Malformed record at line 7: expected ':' record marker"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "closed");
        let err = IhexError::from(io_err);
        assert!(matches!(err, IhexError::Io(_)));
    }
}
