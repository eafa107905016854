//! Custom error types for Coggnify
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Coggnify operations
#[derive(Error, Debug)]
pub enum CoggnifyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for form input and wizard preconditions
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Camera permission denied or no camera available
    #[error("Camera error: {0}")]
    Camera(String),

    /// A command was issued on a step that does not accept it
    #[error("Wizard error: {0}")]
    Wizard(String),

    /// License processing failed or was cancelled
    #[error("Processing error: {0}")]
    Processing(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CoggnifyError {
    /// Create a "not found" error for the owner record
    pub fn owner_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Owner",
            identifier: identifier.into(),
        }
    }

    /// The error shown when the camera cannot be opened
    pub fn camera_unavailable() -> Self {
        Self::Camera("Could not access camera. Please check permissions.".into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a camera error
    pub fn is_camera(&self) -> bool {
        matches!(self, Self::Camera(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CoggnifyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoggnifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Coggnify operations
pub type CoggnifyResult<T> = Result<T, CoggnifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoggnifyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CoggnifyError::owner_not_found("CR-123456");
        assert_eq!(err.to_string(), "Owner not found: CR-123456");
        assert!(matches!(err, CoggnifyError::NotFound { entity_type: "Owner", .. }));
    }

    #[test]
    fn test_camera_unavailable_message() {
        let err = CoggnifyError::camera_unavailable();
        assert!(err.is_camera());
        assert_eq!(
            err.to_string(),
            "Camera error: Could not access camera. Please check permissions."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoggnifyError = io_err.into();
        assert!(matches!(err, CoggnifyError::Io(_)));
    }
}
