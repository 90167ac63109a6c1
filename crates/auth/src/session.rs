//! Session persistence and the auth state machine
//!
//! A session is the pair (`user-data`, `auth-token`) held in one of two
//! stores. "Remember me" puts it in the persistent store; otherwise it goes
//! to the volatile one. Writing to one store always clears the other so at
//! most one session exists.

use crate::storage::{AUTH_TOKEN_KEY, KeyValueStore, MOCK_TOKEN, USER_DATA_KEY};
use crate::user::User;
use tms_core::{TmsError, TmsResult};

// ============================================================================
// Auth State
// ============================================================================

/// Where the app stands with respect to sign-in
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    /// Stored session not yet inspected
    #[default]
    Checking,
    SignedOut,
    SignedIn(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn(_))
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, AuthState::Checking)
    }

    /// Resolve the startup check
    pub fn resolved(user: Option<User>) -> Self {
        match user {
            Some(user) => AuthState::SignedIn(user),
            None => AuthState::SignedOut,
        }
    }
}

// ============================================================================
// Session Manager
// ============================================================================

/// Reads and writes the session across the persistent and volatile stores
#[derive(Debug, Clone)]
pub struct SessionManager<P, S> {
    persistent: P,
    volatile: S,
}

impl<P: KeyValueStore, S: KeyValueStore> SessionManager<P, S> {
    pub fn new(persistent: P, volatile: S) -> Self {
        Self {
            persistent,
            volatile,
        }
    }

    pub fn persistent(&self) -> &P {
        &self.persistent
    }

    pub fn volatile(&self) -> &S {
        &self.volatile
    }

    /// Save the session, in the persistent store when `remember_me` is set
    pub fn store_user(&mut self, user: &User, remember_me: bool) -> TmsResult<()> {
        let blob = serde_json::to_string(user)?;

        if remember_me {
            write_session(&mut self.persistent, &blob)?;
            clear_session(&mut self.volatile)?;
        } else {
            write_session(&mut self.volatile, &blob)?;
            if let Err(e) = clear_session(&mut self.persistent) {
                tracing::warn!("Failed to clear persistent session: {}", e);
            }
        }

        tracing::info!(
            "Stored session for '{}' ({})",
            user.email,
            if remember_me { "persistent" } else { "this window only" }
        );
        Ok(())
    }

    /// True when either store holds a well-formed session
    pub fn validate_token(&self) -> bool {
        self.stored_user().is_ok()
    }

    /// The stored user, clearing both stores when the session is unusable
    pub fn current_user(&mut self) -> Option<User> {
        match self.stored_user() {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!("No usable session: {}", e);
                if let Err(e) = self.clear() {
                    tracing::warn!("Failed to clear session: {}", e);
                }
                None
            }
        }
    }

    /// Remove the session keys from both stores
    ///
    /// Both stores are always attempted; the first failure is returned.
    pub fn clear(&mut self) -> TmsResult<()> {
        let persistent = clear_session(&mut self.persistent);
        let volatile = clear_session(&mut self.volatile);
        persistent.and(volatile)?;
        tracing::info!("Cleared session");
        Ok(())
    }

    fn stored_user(&self) -> TmsResult<User> {
        // The volatile store wins: it is only written when remember-me was off
        read_session(&self.volatile).or_else(|_| read_session(&self.persistent))
    }
}

fn write_session(store: &mut impl KeyValueStore, blob: &str) -> TmsResult<()> {
    store.set(USER_DATA_KEY, blob)?;
    store.set(AUTH_TOKEN_KEY, MOCK_TOKEN)
}

fn clear_session(store: &mut impl KeyValueStore) -> TmsResult<()> {
    store.remove(USER_DATA_KEY)?;
    store.remove(AUTH_TOKEN_KEY)
}

fn read_session(store: &impl KeyValueStore) -> TmsResult<User> {
    let token = store.get(AUTH_TOKEN_KEY)?;
    let blob = store.get(USER_DATA_KEY)?;

    let (Some(token), Some(blob)) = (token, blob) else {
        return Err(TmsError::InvalidSession("no token or user data".to_string()));
    };

    let user: User = serde_json::from_str(&blob)
        .map_err(|e| TmsError::InvalidSession(format!("corrupt user data: {}", e)))?;

    if token != MOCK_TOKEN {
        return Err(TmsError::InvalidSession("unrecognised token".to_string()));
    }

    Ok(user)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::mock_user;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::tempdir;

    fn manager() -> SessionManager<MemoryStore, MemoryStore> {
        SessionManager::new(MemoryStore::new(), MemoryStore::new())
    }

    #[test]
    fn test_remember_me_uses_persistent_store() {
        let mut sessions = manager();
        sessions.store_user(&mock_user(), true).unwrap();

        assert!(sessions.persistent().get(AUTH_TOKEN_KEY).unwrap().is_some());
        assert!(sessions.volatile().get(AUTH_TOKEN_KEY).unwrap().is_none());
        assert!(sessions.validate_token());
    }

    #[test]
    fn test_without_remember_me_uses_volatile_store() {
        let mut sessions = manager();
        sessions.store_user(&mock_user(), true).unwrap();
        sessions.store_user(&mock_user(), false).unwrap();

        assert!(sessions.volatile().get(USER_DATA_KEY).unwrap().is_some());
        assert!(sessions.persistent().get(USER_DATA_KEY).unwrap().is_none());
        assert_eq!(sessions.current_user(), Some(mock_user()));
    }

    #[test]
    fn test_clear_empties_both_stores() {
        let mut sessions = manager();
        sessions.store_user(&mock_user(), true).unwrap();
        sessions.clear().unwrap();

        assert!(!sessions.validate_token());
        assert!(sessions.persistent().get(USER_DATA_KEY).unwrap().is_none());
        assert!(sessions.volatile().get(USER_DATA_KEY).unwrap().is_none());
    }

    #[test]
    fn test_tampered_token_clears_user_data() {
        let mut persistent = MemoryStore::new();
        persistent
            .set(USER_DATA_KEY, &serde_json::to_string(&mock_user()).unwrap())
            .unwrap();
        persistent.set(AUTH_TOKEN_KEY, "forged-token").unwrap();
        let mut sessions = SessionManager::new(persistent, MemoryStore::new());

        assert!(!sessions.validate_token());
        assert_eq!(sessions.current_user(), None);
        assert!(sessions.persistent().get(USER_DATA_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_user_blob_clears() {
        let mut volatile = MemoryStore::new();
        volatile.set(USER_DATA_KEY, "{not json").unwrap();
        volatile.set(AUTH_TOKEN_KEY, MOCK_TOKEN).unwrap();
        let mut sessions = SessionManager::new(MemoryStore::new(), volatile);

        assert_eq!(sessions.current_user(), None);
        assert!(sessions.volatile().get(AUTH_TOKEN_KEY).unwrap().is_none());
    }

    #[test]
    fn test_logout_with_corrupt_storage_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(crate::storage::STORAGE_FILE_NAME);
        std::fs::write(&path, "{garbage").unwrap();
        let mut sessions = SessionManager::new(FileStore::new(&path), MemoryStore::new());

        sessions.store_user(&mock_user(), false).unwrap();
        assert!(sessions.validate_token());

        sessions.clear().unwrap();
        assert!(!sessions.validate_token());
        assert!(sessions.volatile().get(AUTH_TOKEN_KEY).unwrap().is_none());

        std::fs::write(&path, "{garbage").unwrap();
        sessions.store_user(&mock_user(), true).unwrap();
        assert_eq!(
            sessions.persistent().get(AUTH_TOKEN_KEY).unwrap().as_deref(),
            Some(MOCK_TOKEN)
        );
    }

    #[test]
    fn test_token_without_user_is_invalid() {
        let mut persistent = MemoryStore::new();
        persistent.set(AUTH_TOKEN_KEY, MOCK_TOKEN).unwrap();
        let sessions = SessionManager::new(persistent, MemoryStore::new());
        assert!(!sessions.validate_token());
    }

    #[test]
    fn test_remembered_session_survives_restart() {
        let dir = tempdir().unwrap();
        let mut sessions = SessionManager::new(FileStore::in_dir(dir.path()), MemoryStore::new());
        sessions.store_user(&mock_user(), true).unwrap();

        let mut restarted = SessionManager::new(FileStore::in_dir(dir.path()), MemoryStore::new());
        assert_eq!(restarted.current_user().map(|u| u.name), Some("Admin User".to_string()));
    }

    #[test]
    fn test_auth_state() {
        assert!(AuthState::default().is_checking());
        assert_eq!(AuthState::resolved(None), AuthState::SignedOut);

        let state = AuthState::resolved(Some(mock_user()));
        assert!(state.is_signed_in());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("1"));
    }
}
