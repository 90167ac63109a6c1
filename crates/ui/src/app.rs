//! Main Application Component for the Teacher Management System
//!
//! This module contains the root Dioxus component. It resolves the stored
//! session on first render, then shows either the login screen or the
//! signed-in layout: sidebar, content area, status bar and dialog overlay.

use dioxus::prelude::*;
use tms_auth::AuthState;
use tms_core::format::initials;

use crate::components::dialogs::{
    ConfirmDeleteDialog, LeaveDetailsDialog, SlotDialog, SlotDialogMode, TeacherDialog,
    TeacherDialogMode,
};
use crate::hooks::{use_auth, use_session_check};
use crate::pages::{
    AttendancePage, DashboardPage, LeaveRequestsPage, LoginPage, PerformancePage, SettingsPage,
    TeacherDetailPage, TeachersPage, TimetablePage,
};
use crate::state::{APP_STATE, Dialog, Page, StatusLevel, use_auth_state, use_current_page};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_session_check();

    match use_auth_state() {
        AuthState::Checking => rsx! {
            div {
                class: "h-screen w-screen flex items-center justify-center bg-gray-50",
                div {
                    class: "text-center",
                    div { class: "animate-spin text-4xl mb-4", "⏳" }
                    p { class: "text-gray-500", "Loading..." }
                }
            }
        },
        AuthState::SignedOut => rsx! { LoginPage {} },
        AuthState::SignedIn(_) => rsx! {
            div {
                class: "app-container h-screen w-screen flex flex-col bg-gray-50 text-gray-900 overflow-hidden",

                div {
                    class: "flex flex-1 overflow-hidden",
                    Sidebar {}
                    MainContent {}
                }

                StatusBar {}
                DialogOverlay {}
            }
        },
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left sidebar with navigation and the signed-in user
#[component]
fn Sidebar() -> Element {
    let current_page = use_current_page();
    let auth = use_auth();
    let state = APP_STATE.read();
    let user = state.current_user().cloned();
    drop(state);

    rsx! {
        aside {
            class: "sidebar w-64 bg-white border-r border-gray-200 flex flex-col shrink-0",

            div {
                class: "h-16 flex items-center gap-2 px-6 border-b border-gray-200",
                span { class: "text-2xl", "🎓" }
                span { class: "text-lg font-bold text-gray-900", "TMS" }
            }

            nav {
                class: "flex-1 py-4 overflow-y-auto",
                for page in Page::nav_items().iter().copied() {
                    SidebarItem {
                        key: "{page.display_name()}",
                        page: page,
                        current: current_page,
                    }
                }
            }

            if let Some(user) = user {
                div {
                    class: "border-t border-gray-200 p-4",
                    div {
                        class: "flex items-center gap-3 mb-3",
                        div {
                            class: "w-10 h-10 rounded-full bg-blue-600 text-white flex items-center justify-center font-semibold",
                            "{initials(&user.name)}"
                        }
                        div {
                            class: "min-w-0",
                            p { class: "text-sm font-medium text-gray-900 truncate", "{user.name}" }
                            p { class: "text-xs text-gray-500 truncate", "{user.email}" }
                            if let Some(department) = &user.department {
                                p { class: "text-xs text-gray-400 truncate", "{department}" }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "w-full px-3 py-2 text-sm text-red-600 hover:bg-red-50 rounded-lg transition-colors text-left disabled:opacity-50",
                        disabled: auth.is_pending(),
                        onclick: move |_| auth.logout(),
                        if auth.is_pending() { "Signing out..." } else { "🚪 Logout" }
                    }
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(page: Page, current: Page) -> Element {
    let is_active = page == current.nav_section();
    let icon = page.icon();
    let name = page.display_name();

    rsx! {
        button {
            r#type: "button",
            class: "w-full flex items-center gap-3 px-6 py-3 text-sm font-medium text-left transition-colors",
            class: if is_active { "bg-blue-50 text-blue-700 border-r-4 border-blue-600" } else { "text-gray-600 hover:bg-gray-50 hover:text-gray-900" },
            title: "{name}",
            onclick: move |_| {
                APP_STATE.write().ui.navigate(page);
            },
            span { class: "text-lg", "{icon}" }
            span { "{name}" }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active page
#[component]
fn MainContent() -> Element {
    let current_page = use_current_page();

    rsx! {
        main {
            class: "flex-1 overflow-auto bg-gray-50",
            match current_page {
                Page::Dashboard => rsx! { DashboardPage {} },
                Page::Teachers => rsx! { TeachersPage {} },
                Page::TeacherDetail => rsx! { TeacherDetailPage {} },
                Page::Timetable => rsx! { TimetablePage {} },
                Page::LeaveRequests => rsx! { LeaveRequestsPage {} },
                Page::Attendance => rsx! { AttendancePage {} },
                Page::Performance => rsx! { PerformancePage {} },
                Page::Settings => rsx! { SettingsPage {} },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

fn status_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Info => "text-gray-600",
        StatusLevel::Success => "text-green-600",
        StatusLevel::Warning => "text-yellow-600",
        StatusLevel::Error => "text-red-600",
    }
}

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let teacher_count = state.data.teachers().len();
    let pending = state.data.leave_stats().pending;
    drop(state);

    rsx! {
        footer {
            class: "status-bar h-8 bg-white border-t border-gray-200 flex items-center px-4 text-xs text-gray-500 shrink-0",

            if let Some(msg) = status {
                span { class: status_class(msg.level), "{msg.text}" }
                button {
                    r#type: "button",
                    class: "ml-2 text-gray-400 hover:text-gray-600",
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "✕"
                }
            } else {
                span { "Ready" }
            }

            div { class: "flex-1" }

            div {
                class: "flex items-center gap-4",
                span { "Teachers: {teacher_count}" }
                span { "Pending leaves: {pending}" }
            }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

fn dialog_width(dialog: &Dialog) -> &'static str {
    match dialog {
        Dialog::NewTeacher | Dialog::EditTeacher(_) => "max-w-3xl w-full",
        Dialog::NewSlot { .. } | Dialog::EditSlot(_) => "max-w-2xl w-full",
        _ => "max-w-lg w-full",
    }
}

/// Modal dialog overlay
#[component]
fn DialogOverlay() -> Element {
    let state = APP_STATE.read();
    let dialog = state.ui.active_dialog.clone();
    drop(state);

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center",

            // Backdrop
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| {
                    APP_STATE.write().ui.close_dialog();
                }
            }

            div {
                class: "relative bg-white rounded-xl shadow-xl border border-gray-200 mx-4 {dialog_width(&dialog)}",
                onclick: move |e| e.stop_propagation(),

                match dialog.clone() {
                    Dialog::NewTeacher => rsx! {
                        TeacherDialog { mode: TeacherDialogMode::Create }
                    },
                    Dialog::EditTeacher(id) => rsx! {
                        TeacherDialog { mode: TeacherDialogMode::Edit(id) }
                    },
                    Dialog::NewSlot { day, start } => rsx! {
                        SlotDialog { mode: SlotDialogMode::Create { day, start } }
                    },
                    Dialog::EditSlot(id) => rsx! {
                        SlotDialog { mode: SlotDialogMode::Edit(id) }
                    },
                    Dialog::ConfirmDelete(target) => rsx! {
                        ConfirmDeleteDialog { target: target }
                    },
                    Dialog::LeaveDetails(id) => rsx! {
                        LeaveDetailsDialog { request_id: id }
                    },
                    Dialog::Error(message) => rsx! {
                        ErrorDialog { message: message }
                    },
                }
            }
        }
    }
}

/// Error dialog
#[component]
fn ErrorDialog(message: String) -> Element {
    rsx! {
        div {
            class: "p-6",

            div {
                class: "flex items-start gap-3 mb-4",
                span { class: "text-2xl", "❌" }
                div {
                    h2 { class: "text-xl font-bold text-red-600", "Error" }
                    p { class: "text-gray-600 mt-1", "{message}" }
                }
            }

            div {
                class: "flex justify-end",
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: move |_| {
                        APP_STATE.write().ui.close_dialog();
                    },
                    "Close"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_icon() {
        assert_eq!(Page::Dashboard.icon(), "🏠");
        assert_eq!(Page::TeacherDetail.icon(), Page::Teachers.icon());
    }

    #[test]
    fn test_page_display_name() {
        assert_eq!(Page::LeaveRequests.display_name(), "Leave Requests");
        assert_eq!(Page::TeacherDetail.nav_section(), Page::Teachers);
    }

    #[test]
    fn test_dialog_width() {
        assert_eq!(dialog_width(&Dialog::NewTeacher), "max-w-3xl w-full");
        assert_eq!(dialog_width(&Dialog::Error("x".to_string())), "max-w-lg w-full");
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(StatusLevel::Error), "text-red-600");
        assert_eq!(status_class(StatusLevel::Success), "text-green-600");
    }
}
