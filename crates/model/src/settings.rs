//! Administrator preferences
//!
//! Settings are held in memory for the life of the window. Toggles are
//! addressed through `NotificationKind` and `SystemToggle` so the page can
//! render each group from one list.

use crate::teacher::is_valid_email;
use serde::{Deserialize, Serialize};
use tms_core::{FieldErrors, Validatable};

pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
}

/// Editable profile of the signed-in administrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Shown read-only
    pub role: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@school.edu".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            role: "Administrator".to_string(),
        }
    }
}

impl Validatable for ProfileSettings {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require(field::NAME, "Name", &self.name);
        if self.email.trim().is_empty() {
            errors.add(field::EMAIL, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add(field::EMAIL, "Email is invalid");
        }
        errors
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub leave_requests: bool,
    pub attendance: bool,
    pub performance: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            leave_requests: true,
            attendance: true,
            performance: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Push,
    LeaveRequests,
    Attendance,
    Performance,
}

impl NotificationKind {
    pub fn all() -> &'static [NotificationKind] {
        &[
            NotificationKind::Email,
            NotificationKind::Push,
            NotificationKind::LeaveRequests,
            NotificationKind::Attendance,
            NotificationKind::Performance,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Email => "Email Notifications",
            NotificationKind::Push => "Push Notifications",
            NotificationKind::LeaveRequests => "Leave Request Alerts",
            NotificationKind::Attendance => "Attendance Alerts",
            NotificationKind::Performance => "Performance Reports",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationKind::Email => "Receive notifications via email",
            NotificationKind::Push => "Receive push notifications on this device",
            NotificationKind::LeaveRequests => "Get notified about new leave requests",
            NotificationKind::Attendance => "Get notified about attendance issues",
            NotificationKind::Performance => "Get notified about performance updates",
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::LeaveRequests => self.leave_requests,
            NotificationKind::Attendance => self.attendance,
            NotificationKind::Performance => self.performance,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        let slot = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::LeaveRequests => &mut self.leave_requests,
            NotificationKind::Attendance => &mut self.attendance,
            NotificationKind::Performance => &mut self.performance,
        };
        *slot = enabled;
    }
}

// ============================================================================
// System
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub auto_backup: bool,
    pub maintenance_mode: bool,
    pub debug_mode: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            auto_backup: true,
            maintenance_mode: false,
            debug_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemToggle {
    AutoBackup,
    MaintenanceMode,
    DebugMode,
}

impl SystemToggle {
    pub fn all() -> &'static [SystemToggle] {
        &[
            SystemToggle::AutoBackup,
            SystemToggle::MaintenanceMode,
            SystemToggle::DebugMode,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SystemToggle::AutoBackup => "Auto Backup",
            SystemToggle::MaintenanceMode => "Maintenance Mode",
            SystemToggle::DebugMode => "Debug Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SystemToggle::AutoBackup => "Automatically backup data daily",
            SystemToggle::MaintenanceMode => "Enable system maintenance mode",
            SystemToggle::DebugMode => "Enable debug logging",
        }
    }
}

impl SystemSettings {
    pub fn get(&self, toggle: SystemToggle) -> bool {
        match toggle {
            SystemToggle::AutoBackup => self.auto_backup,
            SystemToggle::MaintenanceMode => self.maintenance_mode,
            SystemToggle::DebugMode => self.debug_mode,
        }
    }

    pub fn set(&mut self, toggle: SystemToggle, enabled: bool) {
        let slot = match toggle {
            SystemToggle::AutoBackup => &mut self.auto_backup,
            SystemToggle::MaintenanceMode => &mut self.maintenance_mode,
            SystemToggle::DebugMode => &mut self.debug_mode,
        };
        *slot = enabled;
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub system: SystemSettings,
}

impl Validatable for Settings {
    fn field_errors(&self) -> FieldErrors {
        self.profile.field_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.notifications.email);
        assert!(!settings.notifications.push);
        assert!(settings.system.auto_backup);
        assert_eq!(settings.profile.role, "Administrator");
        assert!(settings.is_valid());
    }

    #[test]
    fn test_toggles() {
        let mut settings = Settings::default();
        for kind in NotificationKind::all() {
            settings.notifications.set(*kind, true);
            assert!(settings.notifications.get(*kind));
        }
        settings.system.set(SystemToggle::DebugMode, true);
        assert!(settings.system.debug_mode);
        assert!(!settings.system.get(SystemToggle::MaintenanceMode));
    }

    #[test]
    fn test_profile_email_validation() {
        let mut settings = Settings::default();
        settings.profile.email = "admin".to_string();
        assert_eq!(
            settings.field_errors().get(field::EMAIL),
            Some("Email is invalid")
        );

        settings.profile.name = String::new();
        assert_eq!(settings.field_errors().len(), 2);
    }
}
