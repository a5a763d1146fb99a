//! Preference storage error types
//!
//! Defines all errors that can occur when reading or writing durable
//! client storage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in a preference store
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing file exists but does not hold a JSON object
    #[error("Corrupt preference file {path:?}: {reason}")]
    Corruption { path: PathBuf, reason: String },

    /// The platform storage is unavailable (private browsing, quota, no window)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for PreferenceError {
    fn from(err: serde_json::Error) -> Self {
        PreferenceError::Serialization(err.to_string())
    }
}

/// Result type alias for preference operations
pub type PreferenceResult<T> = Result<T, PreferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PreferenceError::Unavailable("no window".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: no window");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PreferenceError = io_err.into();
        assert!(matches!(err, PreferenceError::Io(_)));
    }
}
