//! # UI Hooks
//!
//! Custom Dioxus hooks for the TMS UI.
//!
//! - Sign-in and sign-out with simulated latency
//! - The startup session check

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_auth;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_auth::{LOGIN_FAILED_MESSAGE, UseAuth, use_auth, use_session_check};
