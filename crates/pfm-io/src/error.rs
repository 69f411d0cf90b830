//! Error types for loader operations.
//!
//! Every failure aborts the load; no partial image is ever returned.

use std::io;
use thiserror::Error;

/// Loader error.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying stream error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Data-model error from pfm-core.
    #[error("core error: {0}")]
    Core(#[from] pfm_core::Error),

    /// Structurally invalid input (magic, dimensions, scale, header layout).
    #[error("invalid format: {reason} ({value})")]
    InvalidFormat {
        /// What is wrong.
        reason: &'static str,
        /// The offending raw value.
        value: String,
    },

    /// The payload is shorter than the header promises.
    #[error("truncated data: read {actual} of {expected} bytes")]
    TruncatedData {
        /// Bytes the header promises.
        expected: usize,
        /// Bytes actually read.
        actual: usize,
    },
}

impl IoError {
    /// Creates an [`IoError::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(reason: &'static str, value: impl ToString) -> Self {
        Self::InvalidFormat {
            reason,
            value: value.to_string(),
        }
    }

    /// Returns `true` for [`IoError::InvalidFormat`].
    #[inline]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

/// Result type for loader operations.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_values() {
        let err = IoError::invalid_format("invalid magic", "P6");
        assert_eq!(err.to_string(), "invalid format: invalid magic (P6)");
        assert!(err.is_invalid_format());

        let err = IoError::TruncatedData {
            expected: 48,
            actual: 47,
        };
        assert_eq!(err.to_string(), "truncated data: read 47 of 48 bytes");
        assert!(!err.is_invalid_format());
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: IoError = io_err.into();
        assert!(matches!(err, IoError::Io(_)));
    }
}
