//! # TMS Auth
//!
//! Mock sign-in for the Teacher Management System: a single hard-coded
//! account, a sentinel token, and session storage split between a
//! persistent JSON file and a per-window in-memory map.

pub mod credentials;
pub mod session;
pub mod storage;
pub mod user;

pub use credentials::{
    DEFAULT_LOGIN_LATENCY, DEFAULT_LOGOUT_LATENCY, LoginCredentials, MOCK_EMAIL, MOCK_PASSWORD,
    authenticate, login, mock_user, simulate_latency,
};
pub use session::{AuthState, SessionManager};
pub use storage::{
    AUTH_TOKEN_KEY, FileStore, KeyValueStore, MOCK_TOKEN, MemoryStore, USER_DATA_KEY,
};
pub use user::User;

/// Session manager used by the desktop app
pub type AppSession = SessionManager<FileStore, MemoryStore>;
