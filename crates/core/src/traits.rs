//! Core traits for TMS
//!
//! Shared behaviors implemented by records and forms throughout the
//! workspace: validation, identity lookups and display naming.

use crate::error::TmsResult;
use crate::types::FieldErrors;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for form data that can be checked before it becomes a record
///
/// Implementors report every failing field at once so the UI can render
/// inline messages next to each input.
///
/// # Example
///
/// ```rust,ignore
/// use tms_core::{FieldErrors, Validatable};
///
/// struct LoginForm {
///     email: String,
/// }
///
/// impl Validatable for LoginForm {
///     fn field_errors(&self) -> FieldErrors {
///         let mut errors = FieldErrors::new();
///         if self.email.trim().is_empty() {
///             errors.add("email", "Email is required");
///         }
///         errors
///     }
/// }
/// ```
pub trait Validatable {
    /// Collect all field errors (empty when valid)
    fn field_errors(&self) -> FieldErrors;

    /// Validate, failing with the first field error
    fn validate(&self) -> TmsResult<()> {
        self.field_errors().into_result()
    }

    /// Check if the form is valid without returning error details
    fn is_valid(&self) -> bool {
        self.field_errors().is_empty()
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for records keyed by a string identifier
pub trait Identifiable {
    /// Get the identifier
    fn id(&self) -> &str;

    /// Check if this matches another identifier
    fn matches_id(&self, id: &str) -> bool {
        self.id() == id
    }
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for records shown with a person's name and avatar initials
pub trait Named {
    /// Full display name
    fn display_name(&self) -> String;

    /// Avatar fallback initials
    fn initials(&self) -> String {
        crate::format::initials(&self.display_name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: String,
    }

    impl Validatable for Probe {
        fn field_errors(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if self.name.is_empty() {
                errors.add("name", "Name is required");
            }
            errors
        }
    }

    impl Identifiable for Probe {
        fn id(&self) -> &str {
            "probe-1"
        }
    }

    impl Named for Probe {
        fn display_name(&self) -> String {
            self.name.clone()
        }
    }

    #[test]
    fn test_validatable_trait() {
        let valid = Probe {
            name: "Ada Lovelace".to_string(),
        };
        assert!(valid.is_valid());
        assert!(valid.validate().is_ok());

        let invalid = Probe {
            name: String::new(),
        };
        assert!(!invalid.is_valid());
        let err = invalid.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_identifiable_matches() {
        let probe = Probe {
            name: "x".to_string(),
        };
        assert!(probe.matches_id("probe-1"));
        assert!(!probe.matches_id("probe-2"));
    }

    #[test]
    fn test_named_initials() {
        let probe = Probe {
            name: "ada lovelace".to_string(),
        };
        assert_eq!(probe.initials(), "AL");
    }
}
