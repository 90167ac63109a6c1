//! # Dialog Components
//!
//! Modal content rendered by the app's dialog overlay.
//!
//! ## Dialogs
//!
//! - **TeacherDialog**: add and edit teachers
//! - **SlotDialog**: add and edit timetable slots
//! - **ConfirmDeleteDialog**: confirmation before removing a teacher or slot
//! - **LeaveDetailsDialog**: one leave request, with approve/reject
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tms_ui::components::dialogs::{TeacherDialog, TeacherDialogMode};
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         TeacherDialog { mode: TeacherDialogMode::Create }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod leave_details;
pub mod slot_dialog;
pub mod teacher_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use leave_details::LeaveDetailsDialog;
pub use slot_dialog::{SlotDialog, SlotDialogMode};
pub use teacher_dialog::{TeacherDialog, TeacherDialogMode};
