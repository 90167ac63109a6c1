//! # TMS Core
//!
//! Core types, traits, and error handling for the Teacher Management System.
//!
//! This crate provides the foundational building blocks used by the model,
//! auth and UI crates, including:
//!
//! - **Types**: Identifier aliases and the field-keyed `FieldErrors` set
//! - **Traits**: Common behaviors like `Validatable`, `Identifiable`, `Named`
//! - **Format**: Date, time, currency and initials formatting
//! - **Errors**: Unified error handling with `TmsError` and `TmsResult`
//!

pub mod error;
pub mod format;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{TmsError, TmsResult};
pub use traits::{Identifiable, Named, Validatable};
pub use types::{
    AttendanceId, FieldErrors, LeaveRequestId, PerformanceId, SlotId, TeacherId, UserId,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
