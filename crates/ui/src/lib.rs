//! # TMS UI
//!
//! Dioxus Desktop UI for the Teacher Management System.
//!
//! This crate provides the administrator dashboard: sign-in, the teacher
//! directory, the weekly timetable, leave approvals, attendance,
//! performance and settings.
//!
//! ## Features
//!
//! - Session restored on startup from the persistent store
//! - Searchable, filterable teacher cards with add/edit/delete dialogs
//! - Click-to-add timetable grid
//! - Leave approval with approver and date recorded
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use tms_auth;
pub use tms_core;
pub use tms_model;

// Re-export main components
pub use app::App;
pub use config::AppConfig;
pub use pages::{DashboardPage, LoginPage, TeachersPage};
pub use state::{
    APP_STATE, AppState, DeleteTarget, Dialog, Page, StatusLevel, StatusMessage, UiState,
};

// Re-export components
pub use components::{
    AttendanceOverview, Avatar, Checkbox, LeaveRequestsTable, NumberInput, PerformanceDashboard,
    SearchFilters, Select, SelectOption, StatsCard, TeacherCard, TextInput, TimetableGrid, Toggle,
};

// Re-export hooks
pub use hooks::{UseAuth, use_auth};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "TMS";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the desktop application
///
/// The configuration must already be installed with [`config::install`]
/// so that state created on first render sees the same storage directory.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     let config = tms_ui::AppConfig::load().unwrap_or_default();
///     tms_ui::config::install(config);
///     tms_ui::launch();
/// }
/// ```
pub fn launch() {
    let config = config::current();
    tracing::info!("Starting {} v{}", NAME, VERSION);
    tracing::debug!("Session storage in {}", config.storage_dir().display());

    let window = &config.window;
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title.clone())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(
                            window.min_width,
                            window.min_height,
                        )),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "TMS");
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".timetable-grid"));
        assert!(STYLES.contains(".badge-yellow"));
    }
}
