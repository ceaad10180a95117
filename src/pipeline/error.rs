//! Error types for the generation pipeline
//!
//! There is a single error boundary: any failure during generation or output
//! is fatal and propagates to `main`, which logs it and exits non-zero. No
//! retries and no partial-result persistence; a failed run is rerun from
//! scratch.

use thiserror::Error;

use crate::types::ConfigValidationError;

/// Errors that can occur during dataset generation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(String),

    /// User generation failed
    #[error("User generation failed: {0}")]
    UserGeneration(String),

    /// Session generation failed
    #[error("Session generation failed: {0}")]
    SessionGeneration(String),

    /// Event generation failed
    #[error("Event generation failed: {0}")]
    EventGeneration(String),

    /// I/O error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<ConfigValidationError> for GenerationError {
    fn from(err: ConfigValidationError) -> Self {
        GenerationError::Configuration(err.to_string())
    }
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages() {
        let err = GenerationError::SessionGeneration("no users".to_string());
        assert_eq!(err.to_string(), "Session generation failed: no users");

        let err = GenerationError::EventGeneration("lookup miss".to_string());
        assert_eq!(err.to_string(), "Event generation failed: lookup miss");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: GenerationError = io_error.into();
        assert!(matches!(err, GenerationError::Io(_)));
    }

    #[test]
    fn test_config_validation_error_conversion() {
        let err: GenerationError = ConfigValidationError::InvalidUserCount(0).into();
        assert!(matches!(err, GenerationError::Configuration(_)));
        assert!(err.to_string().contains("User count"));
    }
}
