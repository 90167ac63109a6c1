//! Core types used throughout TMS
//!
//! Identifier aliases shared by every record kind, and the field-keyed
//! error collection produced by form validation.

use crate::error::{TmsError, TmsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Identifiers
// ============================================================================

/// Teacher identifier
pub type TeacherId = String;

/// Timetable slot identifier
pub type SlotId = String;

/// Leave request identifier
pub type LeaveRequestId = String;

/// Attendance record identifier
pub type AttendanceId = String;

/// Performance record identifier
pub type PerformanceId = String;

/// Signed-in user identifier
pub type UserId = String;

// ============================================================================
// Field Errors
// ============================================================================

/// Validation messages keyed by form field name
///
/// Keys are the form's field names (`first_name`, `email`, `zip_code`, ...).
/// Iteration order is stable (sorted by key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field (replaces an earlier one)
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Record `"<label> is required"` if `value` is blank
    pub fn require(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", label));
        }
    }

    /// Get the message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Get the message for a field as an owned value (for component props)
    pub fn message(&self, field: &str) -> Option<String> {
        self.errors.get(field).cloned()
    }

    /// Check if a field has an error
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Drop the error for a single field (the user started editing it)
    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Check if there are no errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over (field, message) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert to a result, failing with the first field error
    pub fn into_result(self) -> TmsResult<()> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some((field, message)) => Err(TmsError::FieldValidation { field, message }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_errors_require() {
        let mut errors = FieldErrors::new();
        errors.require("first_name", "First name", "   ");
        errors.require("last_name", "Last name", "Smith");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert!(!errors.has("last_name"));
    }

    #[test]
    fn test_field_errors_clear_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is invalid");
        errors.add("phone", "Phone is required");

        errors.clear_field("email");
        assert!(!errors.has("email"));
        assert!(errors.has("phone"));
    }

    #[test]
    fn test_field_errors_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("salary", "Salary must be greater than 0");
        let err = errors.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'salary': Salary must be greater than 0"
        );
    }

    #[test]
    fn test_field_errors_iteration_is_sorted() {
        let mut errors = FieldErrors::new();
        errors.add("zip_code", "Zip code is required");
        errors.add("city", "City is required");

        let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["city", "zip_code"]);
    }
}
