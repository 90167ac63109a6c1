//! Application State Management for the Teacher Management System
//!
//! This module provides centralized state management using Dioxus 0.7 Signals.
//! It holds the school records, the session and auth state, the teacher
//! filter, settings, and UI state (page, dialog, status bar).

use chrono::{Local, NaiveDate, NaiveTime, Weekday};
use dioxus::prelude::*;
use tms_auth::{AppSession, AuthState, FileStore, MemoryStore, User};
use tms_core::{LeaveRequestId, Named, SlotId, TeacherId, TmsError, TmsResult, Validatable};
use tms_model::{SchoolData, Settings, SlotForm, Teacher, TeacherFilter, TeacherForm};

use crate::config;

/// Approver recorded when nobody is signed in
pub const FALLBACK_APPROVER: &str = "Admin";

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages/views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Teachers,
    /// Profile of the teacher in `UiState::selected_teacher`
    TeacherDetail,
    Timetable,
    LeaveRequests,
    Attendance,
    Performance,
    Settings,
}

impl Page {
    /// Pages listed in the sidebar, in order
    pub fn nav_items() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Teachers,
            Page::Timetable,
            Page::LeaveRequests,
            Page::Attendance,
            Page::Performance,
            Page::Settings,
        ]
    }

    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Teachers => "Teachers",
            Page::TeacherDetail => "Teacher Details",
            Page::Timetable => "Timetable",
            Page::LeaveRequests => "Leave Requests",
            Page::Attendance => "Attendance",
            Page::Performance => "Performance",
            Page::Settings => "Settings",
        }
    }

    /// Get the icon emoji for this page (for UI display)
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "🏠",
            Page::Teachers | Page::TeacherDetail => "👥",
            Page::Timetable => "📅",
            Page::LeaveRequests => "📄",
            Page::Attendance => "⏰",
            Page::Performance => "📈",
            Page::Settings => "⚙️",
        }
    }

    /// The sidebar entry highlighted while this page is shown
    pub fn nav_section(&self) -> Page {
        match self {
            Page::TeacherDetail => Page::Teachers,
            other => *other,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (page, dialogs, status bar)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Currently active page
    pub active_page: Page,
    /// Teacher shown on the detail page
    pub selected_teacher: Option<TeacherId>,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Show one teacher's profile
    pub fn open_teacher(&mut self, id: impl Into<TeacherId>) {
        self.selected_teacher = Some(id.into());
        self.active_page = Page::TeacherDetail;
    }

    /// Show a dialog
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Dialog types
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    NewTeacher,
    EditTeacher(TeacherId),
    /// New slot pre-filled from the clicked grid cell
    NewSlot { day: Weekday, start: NaiveTime },
    EditSlot(SlotId),
    ConfirmDelete(DeleteTarget),
    LeaveDetails(LeaveRequestId),
    Error(String),
}

/// Target for delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Teacher(TeacherId),
    Slot(SlotId),
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AppState {
    /// School records
    pub data: SchoolData,
    /// Persistent and per-window session storage
    pub session: AppSession,
    pub auth: AuthState,
    /// Teachers page search and filters
    pub teacher_filter: TeacherFilter,
    /// Date shown on the attendance page
    pub attendance_date: NaiveDate,
    pub settings: Settings,
    /// Date the app treats as today
    pub today: NaiveDate,
    pub ui: UiState,
}

impl AppState {
    /// State seeded for the local date, with the configured storage dir
    pub fn new() -> Self {
        let session = AppSession::new(
            FileStore::in_dir(config::current().storage_dir()),
            MemoryStore::new(),
        );
        Self::with_session(session, Local::now().date_naive())
    }

    pub fn with_session(session: AppSession, today: NaiveDate) -> Self {
        Self {
            data: SchoolData::seeded(today),
            session,
            auth: AuthState::Checking,
            teacher_filter: TeacherFilter::default(),
            attendance_date: today,
            settings: Settings::default(),
            today,
            ui: UiState::new(),
        }
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub fn current_user(&self) -> Option<&User> {
        self.auth.user()
    }

    /// Name recorded on approvals
    pub fn approver_name(&self) -> String {
        self.current_user()
            .map(|u| u.display_name())
            .unwrap_or_else(|| FALLBACK_APPROVER.to_string())
    }

    /// Resolve the startup check from stored session data
    pub fn restore_session(&mut self) {
        self.auth = AuthState::resolved(self.session.current_user());
        match self.auth.user() {
            Some(user) => tracing::info!("Restored session for '{}'", user.email),
            None => tracing::info!("No stored session; showing login"),
        }
    }

    /// Record a successful login and open the dashboard
    pub fn sign_in(&mut self, user: User, remember_me: bool) {
        if let Err(e) = self.session.store_user(&user, remember_me) {
            tracing::error!("Failed to store session: {}", e);
            self.ui.set_status(
                format!("Signed in, but the session could not be saved: {}", e),
                StatusLevel::Warning,
            );
        }
        tracing::info!("Signed in as '{}'", user.email);
        self.auth = AuthState::SignedIn(user);
        self.ui.navigate(Page::Dashboard);
    }

    /// Drop the session and return to the login screen
    pub fn sign_out(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::error!("Failed to clear session: {}", e);
        }
        self.auth = AuthState::SignedOut;
        self.ui = UiState::new();
        tracing::info!("Signed out");
    }

    // ========================================================================
    // Teachers
    // ========================================================================

    /// Teacher for the detail page, if it still exists
    pub fn detail_teacher(&self) -> Option<&Teacher> {
        self.ui
            .selected_teacher
            .as_deref()
            .and_then(|id| self.data.teacher(id))
    }

    /// Add (no id) or update a teacher from the dialog form
    pub fn save_teacher(&mut self, id: Option<&str>, form: &TeacherForm) -> TmsResult<TeacherId> {
        let id = match id {
            Some(id) => {
                self.data.update_teacher(id, form)?;
                id.to_string()
            }
            None => self.data.add_teacher(form)?,
        };
        let name = self
            .data
            .teacher(&id)
            .map(|t| t.full_name())
            .unwrap_or_default();
        self.ui.close_dialog();
        self.ui.set_status(format!("Saved {}", name), StatusLevel::Success);
        Ok(id)
    }

    // ========================================================================
    // Timetable
    // ========================================================================

    /// Add (no id) or update a time slot from the dialog form
    pub fn save_slot(&mut self, id: Option<&str>, form: &SlotForm) -> TmsResult<SlotId> {
        let id = match id {
            Some(id) => {
                self.data.update_slot(id, form)?;
                id.to_string()
            }
            None => self.data.add_slot(form)?,
        };
        self.ui.close_dialog();
        self.ui.set_status("Time slot saved", StatusLevel::Success);
        Ok(id)
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// What the confirmation dialog names
    pub fn delete_label(&self, target: &DeleteTarget) -> Option<String> {
        match target {
            DeleteTarget::Teacher(id) => self.data.teacher(id).map(|t| t.full_name()),
            DeleteTarget::Slot(id) => self.data.slot(id).map(|s| s.summary()),
        }
    }

    pub fn confirm_delete(&mut self, target: &DeleteTarget) -> TmsResult<()> {
        let message = match target {
            DeleteTarget::Teacher(id) => {
                let removed = self.data.remove_teacher(id)?;
                if self.ui.selected_teacher.as_deref() == Some(id.as_str()) {
                    self.ui.selected_teacher = None;
                    self.ui.navigate(Page::Teachers);
                }
                format!("Deleted {}", removed.full_name())
            }
            DeleteTarget::Slot(id) => {
                let removed = self.data.remove_slot(id)?;
                format!("Deleted {}", removed.summary())
            }
        };
        self.ui.close_dialog();
        self.ui.set_status(message, StatusLevel::Success);
        Ok(())
    }

    // ========================================================================
    // Leave
    // ========================================================================

    pub fn approve_leave(&mut self, id: &str) -> TmsResult<()> {
        let approver = self.approver_name();
        self.data.approve_leave(id, &approver, self.today)?;
        self.ui.set_status("Leave request approved", StatusLevel::Success);
        Ok(())
    }

    pub fn reject_leave(&mut self, id: &str) -> TmsResult<()> {
        self.data.reject_leave(id)?;
        self.ui.set_status("Leave request rejected", StatusLevel::Info);
        Ok(())
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn save_settings(&mut self, settings: Settings) -> TmsResult<()> {
        settings.validate()?;
        self.settings = settings;
        tracing::info!("Saved settings for '{}'", self.settings.profile.email);
        self.ui.set_status("Settings saved", StatusLevel::Success);
        Ok(())
    }

    /// Log a failed action and tell the user. A record that vanished
    /// gets the error dialog; anything else goes to the status bar.
    pub fn report_error(&mut self, action: &str, error: &TmsError) {
        tracing::warn!("{} failed: {}", action, error);
        let message = format!("{}: {}", action, error);
        if error.is_not_found() {
            self.ui.show_dialog(Dialog::Error(message));
        } else {
            self.ui.set_status(message, StatusLevel::Error);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to access the current page
pub fn use_current_page() -> Page {
    let state = APP_STATE.read();
    state.ui.active_page
}

/// Hook to read the auth state
pub fn use_auth_state() -> AuthState {
    let state = APP_STATE.read();
    state.auth.clone()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use tms_auth::mock_user;
    use tms_model::LeaveStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn state() -> (AppState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let session = AppSession::new(FileStore::in_dir(dir.path()), MemoryStore::new());
        (AppState::with_session(session, today()), dir)
    }

    #[test]
    fn test_ui_state() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_page, Page::Dashboard);

        ui.open_teacher("3");
        assert_eq!(ui.active_page, Page::TeacherDetail);
        assert_eq!(ui.active_page.nav_section(), Page::Teachers);

        ui.show_dialog(Dialog::NewTeacher);
        assert!(ui.active_dialog.is_some());

        ui.close_dialog();
        assert!(ui.active_dialog.is_none());
    }

    #[test]
    fn test_nav_items_exclude_detail() {
        assert_eq!(Page::nav_items().len(), 7);
        assert!(!Page::nav_items().contains(&Page::TeacherDetail));
    }

    #[test]
    fn test_sign_in_and_out() {
        let (mut state, _dir) = state();
        assert!(state.auth.is_checking());

        state.restore_session();
        assert_eq!(state.auth, AuthState::SignedOut);

        state.ui.navigate(Page::Settings);
        state.sign_in(mock_user(), true);
        assert!(state.auth.is_signed_in());
        assert_eq!(state.ui.active_page, Page::Dashboard);
        assert!(state.session.validate_token());

        state.sign_out();
        assert_eq!(state.auth, AuthState::SignedOut);
        assert!(!state.session.validate_token());
    }

    #[test]
    fn test_approver_is_signed_in_user() {
        let (mut state, _dir) = state();
        assert_eq!(state.approver_name(), "Admin");

        state.sign_in(mock_user(), false);
        state.approve_leave("l1").unwrap();

        let request = state.data.leave_request("l1").unwrap();
        assert_eq!(request.status, LeaveStatus::Approved);
        assert_eq!(request.approved_by.as_deref(), Some("Admin User"));
        assert_eq!(request.approved_date, Some(today()));
    }

    #[test]
    fn test_approving_decided_request_fails() {
        let (mut state, _dir) = state();
        state.reject_leave("l2").unwrap();
        assert!(state.approve_leave("l2").is_err());
    }

    #[test]
    fn test_deleting_open_teacher_returns_to_list() {
        let (mut state, _dir) = state();
        state.ui.open_teacher("2");
        let target = DeleteTarget::Teacher("2".to_string());
        assert!(state.delete_label(&target).is_some());

        state.confirm_delete(&target).unwrap();
        assert_eq!(state.ui.active_page, Page::Teachers);
        assert!(state.detail_teacher().is_none());
        assert_eq!(state.data.teachers().len(), 7);
    }

    #[test]
    fn test_save_slot_closes_dialog() {
        let (mut state, _dir) = state();
        let day = Weekday::Fri;
        let start = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
        state.ui.show_dialog(Dialog::NewSlot { day, start });

        let mut form = SlotForm::for_cell(day, start);
        form.teacher_id = "1".to_string();
        form.subject = "Mathematics".to_string();
        form.class_name = "Grade 9A".to_string();
        form.end_time = "17:00".to_string();
        form.room = "Room 101".to_string();

        let id = state.save_slot(None, &form).unwrap();
        assert!(state.ui.active_dialog.is_none());
        assert_eq!(state.data.slot_at(day, start).map(|s| s.id.clone()), Some(id));
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let (mut state, _dir) = state();
        let mut settings = state.settings.clone();
        settings.profile.email = "not-an-email".to_string();

        assert!(state.save_settings(settings).is_err());
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn test_report_error_routes_by_kind() {
        let (mut state, _dir) = state();

        state.report_error("Delete", &TmsError::TeacherNotFound("42".to_string()));
        assert!(matches!(state.ui.active_dialog, Some(Dialog::Error(_))));
        assert!(state.ui.status_message.is_none());

        state.ui.close_dialog();
        state.report_error("Save settings", &TmsError::validation("Email is invalid"));
        assert!(state.ui.active_dialog.is_none());
        assert_eq!(
            state.ui.status_message.as_ref().map(|m| m.level),
            Some(StatusLevel::Error)
        );
    }
}
