//! # Auth Hook
//!
//! Sign-in and sign-out for the login page and the sidebar.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let auth = use_auth();
//!
//! auth.login(LoginCredentials::new(email, password).remember(true));
//!
//! if auth.is_pending() {
//!     // show spinner
//! }
//! ```

use dioxus::prelude::*;
use tms_auth::LoginCredentials;

use crate::config;
use crate::state::APP_STATE;

/// Shown under the login form after a failed attempt
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Handle returned by [`use_auth`]
#[derive(Clone, Copy, PartialEq)]
pub struct UseAuth {
    /// A login or logout round trip is in flight
    pub pending: Signal<bool>,
    /// The last login attempt was rejected
    pub failed: Signal<bool>,
}

impl UseAuth {
    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }

    pub fn has_failed(&self) -> bool {
        *self.failed.read()
    }

    /// Check credentials after the configured latency
    pub fn login(&self, credentials: LoginCredentials) {
        let mut pending = self.pending;
        let mut failed = self.failed;
        if *pending.peek() {
            return;
        }
        pending.set(true);
        failed.set(false);

        let remember_me = credentials.remember_me;
        let latency = config::current().login_latency();
        spawn(async move {
            let result = tms_auth::login(credentials, latency).await;
            pending.set(false);
            match result {
                Ok(user) => APP_STATE.write().sign_in(user, remember_me),
                Err(e) => {
                    tracing::warn!("Login rejected: {}", e);
                    failed.set(true);
                }
            }
        });
    }

    /// Clear the session after the configured latency
    pub fn logout(&self) {
        let mut pending = self.pending;
        if *pending.peek() {
            return;
        }
        pending.set(true);

        let latency = config::current().logout_latency();
        spawn(async move {
            tms_auth::simulate_latency(latency).await;
            pending.set(false);
            APP_STATE.write().sign_out();
        });
    }

    /// Hide the failure banner once the user edits the form
    pub fn clear_error(&self) {
        let mut failed = self.failed;
        if *failed.peek() {
            failed.set(false);
        }
    }
}

/// Create the auth handle for a component
pub fn use_auth() -> UseAuth {
    let pending = use_signal(|| false);
    let failed = use_signal(|| false);

    UseAuth { pending, failed }
}

/// Resolve the startup session check once the root has mounted
pub fn use_session_check() {
    use_effect(|| {
        if APP_STATE.peek().auth.is_checking() {
            APP_STATE.write().restore_session();
        }
    });
}
