//! Application configuration
//!
//! Read once at startup from `<config_dir>/tms/config.toml`. Every section
//! and key is optional; anything missing falls back to the defaults below.
//!
//! ```toml
//! [window]
//! title = "TMS - Teacher Management System"
//! width = 1400
//! height = 900
//!
//! [storage]
//! dir = "/home/me/.local/share/tms"
//!
//! [auth]
//! login_latency_ms = 1000
//! logout_latency_ms = 500
//!
//! [logging]
//! filter = "info,tms_ui=debug"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

const APP_DIR: &str = "tms";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "TMS - Teacher Management System".to_string(),
            width: 1400.0,
            height: 900.0,
            min_width: 1024.0,
            min_height: 700.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `storage.json`; the platform data dir when unset
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub login_latency_ms: u64,
    pub logout_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: tms_auth::DEFAULT_LOGIN_LATENCY.as_millis() as u64,
            logout_latency_ms: tms_auth::DEFAULT_LOGOUT_LATENCY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

// ============================================================================
// AppConfig
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from the platform config path
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            anyhow::bail!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(())
    }

    /// Directory for the persistent session file
    pub fn storage_dir(&self) -> PathBuf {
        self.storage.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.auth.login_latency_ms)
    }

    pub fn logout_latency(&self) -> Duration {
        Duration::from_millis(self.auth.logout_latency_ms)
    }
}

/// `<config_dir>/tms/config.toml`
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// Make `config` the process-wide configuration. Only the first call wins.
pub fn install(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already installed; ignoring");
    }
}

/// The installed configuration, or the defaults
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.login_latency(), Duration::from_millis(1000));
        assert_eq!(config.logout_latency(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::parse(
            r#"
            [auth]
            login_latency_ms = 0

            [storage]
            dir = "/tmp/tms-test"
            "#,
        )
        .unwrap();

        assert_eq!(config.login_latency(), Duration::ZERO);
        assert_eq!(config.auth.logout_latency_ms, 500);
        assert_eq!(config.storage_dir(), PathBuf::from("/tmp/tms-test"));
        assert_eq!(config.window.title, "TMS - Teacher Management System");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window\nwidth = ").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_non_positive_window_is_rejected() {
        assert!(AppConfig::parse("[window]\nwidth = 0").is_err());
    }

    #[test]
    fn test_config_path_ends_with_app_dir() {
        let path = config_path();
        assert!(path.ends_with("tms/config.toml"));
    }
}
