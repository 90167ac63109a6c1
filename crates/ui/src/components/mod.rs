//! # UI Components
//!
//! Reusable Dioxus components for the Teacher Management System.
//!
//! This module provides:
//! - **Inputs**: form inputs (text, number, select, checkbox, toggle)
//! - **Avatar** and **StatsCard**: small building blocks shared by pages
//! - **TeacherCard** and **SearchFilters**: the teacher directory
//! - **TimetableGrid**: the weekly lesson grid
//! - **LeaveRequestsTable**, **AttendanceOverview**, **PerformanceDashboard**
//! - **Dialogs**: modal forms and confirmations
//!
//! ## Component Hierarchy
//!
//! ```text
//! TeachersPage
//! ├── SearchFilters
//! │   └── TextInput / Select
//! └── TeacherCard (multiple)
//!     └── Avatar
//!
//! TimetablePage
//! └── TimetableGrid
//!     ├── SlotCell (multiple)
//!     └── SubjectLegend
//!
//! Dialogs
//! ├── TeacherDialog (add/edit teachers)
//! ├── SlotDialog (add/edit time slots)
//! ├── ConfirmDeleteDialog
//! └── LeaveDetailsDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod attendance_overview;
pub mod avatar;
pub mod dialogs;
pub mod inputs;
pub mod leave_requests_table;
pub mod performance_dashboard;
pub mod search_filters;
pub mod stats_card;
pub mod teacher_card;
pub mod timetable_grid;

// ============================================================================
// Re-exports
// ============================================================================

pub use attendance_overview::AttendanceOverview;
pub use avatar::{Avatar, AvatarSize};
pub use leave_requests_table::LeaveRequestsTable;
pub use performance_dashboard::PerformanceDashboard;
pub use search_filters::SearchFilters;
pub use stats_card::{StatColor, StatsCard};
pub use teacher_card::TeacherCard;
pub use timetable_grid::TimetableGrid;

// Re-export input components
pub use inputs::{Checkbox, NumberInput, Select, SelectOption, TextInput, Toggle, ToggleSize};

// Re-export dialog components
pub use dialogs::{
    ConfirmDeleteDialog, LeaveDetailsDialog, SlotDialog, SlotDialogMode, TeacherDialog,
    TeacherDialogMode,
};
