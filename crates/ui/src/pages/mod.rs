//! Page Components for the Teacher Management System
//!
//! Each page is one sidebar destination, plus the login screen and the
//! teacher profile reached from a card.
//!
//! ## Available Pages
//!
//! - **LoginPage**: sign-in form shown while signed out
//! - **DashboardPage**: headline numbers for today
//! - **TeachersPage**: searchable teacher directory
//! - **TeacherDetailPage**: one teacher's profile
//! - **TimetablePage**: weekly lesson grid
//! - **LeaveRequestsPage**: leave stats and approvals
//! - **AttendancePage**: daily attendance
//! - **PerformancePage**: monthly teaching metrics
//! - **SettingsPage**: profile, notification and system preferences
//!

pub mod attendance;
pub mod dashboard;
pub mod leave_requests;
pub mod login;
pub mod performance;
pub mod settings;
pub mod teacher_detail;
pub mod teachers;
pub mod timetable;

// Re-export page components for convenience
pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use leave_requests::LeaveRequestsPage;
pub use login::LoginPage;
pub use performance::PerformancePage;
pub use settings::SettingsPage;
pub use teacher_detail::TeacherDetailPage;
pub use teachers::TeachersPage;
pub use timetable::TimetablePage;
