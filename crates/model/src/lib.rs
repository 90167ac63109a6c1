//! # TMS Model
//!
//! Records and the rules around them for the Teacher Management System.
//!
//! ## Core Concepts
//!
//! - **Teacher**: a staff record, edited through `TeacherForm`
//! - **TeacherFilter**: free-text search plus department/subject/status/experience selects
//! - **TimetableSlot**: one weekly lesson placed in a day and time cell
//! - **LeaveRequest**: a pending/approved/rejected time-off request
//! - **AttendanceRecord**: one teacher's status for one day
//! - **PerformanceRecord**: one teacher's monthly metrics
//! - **SchoolData**: the in-memory container for all of the above
//!

pub mod attendance;
pub mod catalog;
pub mod filter;
pub mod leave;
pub mod mock;
pub mod performance;
pub mod settings;
pub mod store;
pub mod teacher;
pub mod timetable;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
pub use filter::{ExperienceBand, StatusFilter, TeacherFilter};
pub use leave::{LeaveRequest, LeaveStats, LeaveStatus, LeaveType, leave_days};
pub use performance::{PerformanceRecord, PerformanceSummary, ScoreBand};
pub use settings::{
    NotificationKind, NotificationSettings, ProfileSettings, Settings, SystemSettings,
    SystemToggle,
};
pub use store::{DashboardStats, SchoolData};
pub use teacher::{Address, Teacher, TeacherForm, TeacherStatus, is_valid_email};
pub use timetable::{SlotForm, SubjectColor, TimetableSlot};

pub use tms_core::{FieldErrors, TmsError, TmsResult, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        AttendanceRecord, AttendanceStatus, DashboardStats, FieldErrors, LeaveRequest,
        LeaveStatus, LeaveType, PerformanceRecord, SchoolData, Settings, SlotForm, Teacher,
        TeacherFilter, TeacherForm, TeacherStatus, TimetableSlot, TmsError, TmsResult,
        Validatable,
    };
}
