//! # Record Store Errors
//!
//! Error codes:
//! - ADM_STORE_READ_FAILED: the data file could not be read at startup
//! - ADM_STORE_PARSE_FAILED: the data file is not a JSON record array
//! - ADM_STORE_WRITE_FAILED: the data file could not be rewritten
//! - ADM_STORE_NOT_FOUND: no record carries the requested id
//! - ADM_STORE_ID_EXHAUSTED: the max id leaves no room for another record

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read
    #[error("Failed to read data file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Data file contents are not a valid record array
    #[error("Failed to parse data file {}: {source}", .path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Data file could not be rewritten after a mutation
    #[error("Failed to write data file {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },

    /// No record with the given id
    #[error("Ad network {0} not found")]
    NotFound(i64),

    /// Max existing id is `i64::MAX`, so no next id exists
    #[error("No id left after {0}")]
    IdExhausted(i64),

    /// Store mutex was poisoned by a panicking holder
    #[error("Record store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::ReadFailed { .. } => "ADM_STORE_READ_FAILED",
            StoreError::ParseFailed { .. } => "ADM_STORE_PARSE_FAILED",
            StoreError::WriteFailed { .. } => "ADM_STORE_WRITE_FAILED",
            StoreError::NotFound(_) => "ADM_STORE_NOT_FOUND",
            StoreError::IdExhausted(_) => "ADM_STORE_ID_EXHAUSTED",
            StoreError::LockPoisoned => "ADM_STORE_LOCK_POISONED",
        }
    }

    /// Whether the process cannot start serving after this error
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StoreError::ReadFailed { .. } | StoreError::ParseFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreError::NotFound(3).code(), "ADM_STORE_NOT_FOUND");
        assert_eq!(StoreError::LockPoisoned.code(), "ADM_STORE_LOCK_POISONED");
        assert_eq!(
            StoreError::IdExhausted(i64::MAX).code(),
            "ADM_STORE_ID_EXHAUSTED"
        );
    }

    #[test]
    fn test_read_failure_is_fatal() {
        let err = StoreError::ReadFailed {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_fatal());
        assert!(err.to_string().contains("missing.txt"));
        assert!(!StoreError::NotFound(1).is_fatal());
    }
}
