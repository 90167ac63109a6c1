//! Error types for TMS
//!
//! This module provides unified error handling across the workspace:
//! form validation, record lookups, authentication, client storage
//! and serialization failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for TMS
#[derive(Debug, Error)]
pub enum TmsError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed validation
    #[error("Invalid value for '{field}': {message}")]
    FieldValidation { field: String, message: String },

    /// Date could not be parsed
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Time of day could not be parsed
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Teacher not found
    #[error("Teacher not found: {0}")]
    TeacherNotFound(String),

    /// Timetable slot not found
    #[error("Time slot not found: {0}")]
    SlotNotFound(String),

    /// Leave request not found
    #[error("Leave request not found: {0}")]
    LeaveRequestNotFound(String),

    // ========================================================================
    // Workflow Errors
    // ========================================================================
    /// A leave request can only be decided while it is pending
    #[error("Leave request '{id}' is already {status}")]
    LeaveAlreadyDecided { id: String, status: String },

    // ========================================================================
    // Authentication Errors
    // ========================================================================
    /// Email/password pair did not match
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Stored session was missing or tampered with
    #[error("Session is not valid: {0}")]
    InvalidSession(String),

    // ========================================================================
    // Storage / IO Errors
    // ========================================================================
    /// Client storage read failed
    #[error("Failed to read storage '{path}': {message}")]
    StorageRead { path: PathBuf, message: String },

    /// Client storage write failed
    #[error("Failed to write storage '{path}': {message}")]
    StorageWrite { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl TmsError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        TmsError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        TmsError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TmsError::Validation(_)
                | TmsError::FieldValidation { .. }
                | TmsError::InvalidDate { .. }
                | TmsError::InvalidTime { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TmsError::TeacherNotFound(_)
                | TmsError::SlotNotFound(_)
                | TmsError::LeaveRequestNotFound(_)
        )
    }

    /// Check if this error came from client storage
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            TmsError::StorageRead { .. } | TmsError::StorageWrite { .. }
        )
    }
}

/// Result type alias using TmsError
pub type TmsResult<T> = Result<T, TmsError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = TmsError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_field_validation_error() {
        let err = TmsError::field_validation("email", "Email is invalid");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid value for 'email': Email is invalid"
        );
    }

    #[test]
    fn test_not_found_errors() {
        let err = TmsError::TeacherNotFound("42".to_string());
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Teacher not found: 42");

        assert!(TmsError::SlotNotFound("7".into()).is_not_found());
        assert!(TmsError::LeaveRequestNotFound("3".into()).is_not_found());
    }

    #[test]
    fn test_leave_already_decided() {
        let err = TmsError::LeaveAlreadyDecided {
            id: "3".to_string(),
            status: "approved".to_string(),
        };
        assert_eq!(err.to_string(), "Leave request '3' is already approved");
    }

    #[test]
    fn test_credentials_error() {
        assert_eq!(
            TmsError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_storage_error_classification() {
        let err = TmsError::StorageWrite {
            path: PathBuf::from("storage.json"),
            message: "Permission denied".to_string(),
        };
        assert!(err.is_storage());
        assert!(!err.is_validation());

        let json: TmsError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(!json.is_storage());
    }
}
