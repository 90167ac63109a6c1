//! Mock credential check
//!
//! There is exactly one account. Its email is matched case-insensitively;
//! the password must match exactly.

use crate::user::User;
use chrono::Utc;
use std::time::Duration;
use tms_core::{TmsError, TmsResult};

/// Email of the only account
pub const MOCK_EMAIL: &str = "admin@school.com";

/// Password of the only account
pub const MOCK_PASSWORD: &str = "password123";

/// Default delay before a login attempt resolves
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1000);

/// Default delay before a logout resolves
pub const DEFAULT_LOGOUT_LATENCY: Duration = Duration::from_millis(500);

/// What the login form submits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    pub fn remember(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }
}

/// The account record, before any login
pub fn mock_user() -> User {
    User::new("1", "Admin User", MOCK_EMAIL)
        .with_department("Administration")
}

/// Check credentials against the mock account
pub fn authenticate(credentials: &LoginCredentials) -> TmsResult<User> {
    let user = mock_user();
    let email_matches = user.email.to_lowercase() == credentials.email.trim().to_lowercase();

    if email_matches && credentials.password == MOCK_PASSWORD {
        tracing::info!("Authenticated '{}'", user.email);
        Ok(user.with_last_login(Utc::now()))
    } else {
        tracing::warn!("Authentication failed for '{}'", credentials.email);
        Err(TmsError::InvalidCredentials)
    }
}

/// Wait out the simulated round trip
pub async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// `authenticate` preceded by the simulated round trip
pub async fn login(credentials: LoginCredentials, latency: Duration) -> TmsResult<User> {
    tracing::debug!("Authenticating '{}'", credentials.email);
    simulate_latency(latency).await;
    authenticate(&credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_case_insensitive() {
        let creds = LoginCredentials::new("Admin@School.COM", MOCK_PASSWORD);
        let user = authenticate(&creds).unwrap();
        assert_eq!(user.name, "Admin User");
        assert!(user.last_login.is_some());
    }

    #[test]
    fn test_wrong_password_fails() {
        let creds = LoginCredentials::new(MOCK_EMAIL, "Password123");
        let err = authenticate(&creds).unwrap_err();
        assert!(matches!(err, TmsError::InvalidCredentials));
    }

    #[test]
    fn test_unknown_email_fails() {
        let creds = LoginCredentials::new("teacher@school.com", MOCK_PASSWORD);
        assert!(authenticate(&creds).is_err());
    }

    #[tokio::test]
    async fn test_login_waits_then_checks() {
        let started = std::time::Instant::now();
        let creds = LoginCredentials::new(MOCK_EMAIL, MOCK_PASSWORD).remember(true);

        let user = login(creds, Duration::from_millis(20)).await.unwrap();
        assert_eq!(user.id, "1");
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_login_failure_is_invalid_credentials() {
        let creds = LoginCredentials::new(MOCK_EMAIL, "nope");
        let err = login(creds, Duration::ZERO).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }
}
