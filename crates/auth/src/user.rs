//! The signed-in user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tms_core::{Identifiable, Named, UserId};

/// Account shown in the sidebar profile block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
            department: None,
            last_login: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_last_login(mut self, at: DateTime<Utc>) -> Self {
        self.last_login = Some(at);
        self
    }
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for User {
    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_blob_round_trip() {
        let user = User::new("1", "Admin User", "admin@school.com").with_department("Administration");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatar"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
        assert_eq!(parsed.initials(), "AU");
    }
}
