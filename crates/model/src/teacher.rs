//! Teacher records and the add/edit form
//!
//! A `Teacher` is what the directory stores; a `TeacherForm` is what the
//! add/edit dialog edits. The form keeps every input as entered (strings for
//! text and dates, floats for the number inputs) and only becomes a record
//! once it validates.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tms_core::format::{date_input_value, parse_date};
use tms_core::{FieldErrors, Identifiable, Named, TeacherId, TmsResult, Validatable};

/// Same loose shape check the login and settings forms use
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Check an email address against the form's pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ============================================================================
// Form Field Names
// ============================================================================

/// Field keys shared by the form validator and the dialog inputs
pub mod field {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SUBJECT: &str = "subject";
    pub const DEPARTMENT: &str = "department";
    pub const EXPERIENCE: &str = "experience";
    pub const QUALIFICATION: &str = "qualification";
    pub const JOIN_DATE: &str = "join_date";
    pub const SALARY: &str = "salary";
    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP_CODE: &str = "zip_code";
}

// ============================================================================
// Teacher Status
// ============================================================================

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeacherStatus {
    #[default]
    Active,
    Inactive,
}

impl TeacherStatus {
    /// Value used in selects and filters
    pub fn as_str(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "active",
            TeacherStatus::Inactive => "inactive",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "Active",
            TeacherStatus::Inactive => "Inactive",
        }
    }

    /// Parse a select value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(TeacherStatus::Active),
            "inactive" => Some(TeacherStatus::Inactive),
            _ => None,
        }
    }

    /// All statuses in display order
    pub fn all() -> &'static [TeacherStatus] {
        &[TeacherStatus::Active, TeacherStatus::Inactive]
    }
}

// ============================================================================
// Address
// ============================================================================

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Create a new address
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }

    /// `City, State`
    pub fn locality(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

// ============================================================================
// Teacher
// ============================================================================

/// A member of the teaching staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub department: String,
    /// Years of teaching experience
    pub experience: u32,
    pub qualification: String,
    pub join_date: NaiveDate,
    pub status: TeacherStatus,
    pub avatar: Option<String>,
    /// Annual salary in whole dollars
    pub salary: u64,
    pub address: Address,
}

impl Teacher {
    /// `First Last`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if the teacher is currently employed
    pub fn is_active(&self) -> bool {
        self.status == TeacherStatus::Active
    }

    /// Label used in the timetable teacher picker
    pub fn picker_label(&self) -> String {
        format!("{} - {}", self.full_name(), self.subject)
    }
}

impl Identifiable for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Teacher {
    fn display_name(&self) -> String {
        self.full_name()
    }
}

// ============================================================================
// Teacher Form
// ============================================================================

/// Editable form state for the add/edit teacher dialog
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub department: String,
    pub experience: f64,
    pub qualification: String,
    /// `YYYY-MM-DD` as entered in the date input
    pub join_date: String,
    pub status: TeacherStatus,
    pub salary: f64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Default for TeacherForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            subject: String::new(),
            department: String::new(),
            experience: 0.0,
            qualification: String::new(),
            join_date: String::new(),
            status: TeacherStatus::Active,
            salary: 0.0,
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
        }
    }
}

impl TeacherForm {
    /// Create form state from an existing teacher
    pub fn from_teacher(teacher: &Teacher) -> Self {
        Self {
            first_name: teacher.first_name.clone(),
            last_name: teacher.last_name.clone(),
            email: teacher.email.clone(),
            phone: teacher.phone.clone(),
            subject: teacher.subject.clone(),
            department: teacher.department.clone(),
            experience: f64::from(teacher.experience),
            qualification: teacher.qualification.clone(),
            join_date: date_input_value(teacher.join_date),
            status: teacher.status,
            salary: teacher.salary as f64,
            street: teacher.address.street.clone(),
            city: teacher.address.city.clone(),
            state: teacher.address.state.clone(),
            zip_code: teacher.address.zip_code.clone(),
        }
    }

    /// Build a new record with the given id
    pub fn to_teacher(&self, id: TeacherId) -> TmsResult<Teacher> {
        self.validate()?;
        Ok(Teacher {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            department: self.department.trim().to_string(),
            experience: self.experience.round() as u32,
            qualification: self.qualification.trim().to_string(),
            join_date: parse_date(&self.join_date)?,
            status: self.status,
            avatar: None,
            salary: self.salary.round() as u64,
            address: Address::new(
                self.street.trim(),
                self.city.trim(),
                self.state.trim(),
                self.zip_code.trim(),
            ),
        })
    }

    /// Overwrite an existing record's fields, keeping its id and avatar
    pub fn apply_to(&self, teacher: &mut Teacher) -> TmsResult<()> {
        let mut updated = self.to_teacher(teacher.id.clone())?;
        updated.avatar = teacher.avatar.take();
        *teacher = updated;
        Ok(())
    }
}

impl Validatable for TeacherForm {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        errors.require(field::FIRST_NAME, "First name", &self.first_name);
        errors.require(field::LAST_NAME, "Last name", &self.last_name);

        if self.email.trim().is_empty() {
            errors.add(field::EMAIL, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add(field::EMAIL, "Email is invalid");
        }

        errors.require(field::PHONE, "Phone", &self.phone);
        errors.require(field::SUBJECT, "Subject", &self.subject);
        errors.require(field::DEPARTMENT, "Department", &self.department);

        if self.experience < 0.0 {
            errors.add(field::EXPERIENCE, "Experience must be positive");
        }

        errors.require(field::QUALIFICATION, "Qualification", &self.qualification);

        if self.join_date.trim().is_empty() {
            errors.add(field::JOIN_DATE, "Join date is required");
        } else if parse_date(&self.join_date).is_err() {
            errors.add(field::JOIN_DATE, "Join date is invalid");
        }

        // Checked on the stored whole-dollar value
        if self.salary.is_nan() || self.salary.round() < 1.0 {
            errors.add(field::SALARY, "Salary must be greater than 0");
        }

        errors.require(field::STREET, "Street", &self.street);
        errors.require(field::CITY, "City", &self.city);
        errors.require(field::STATE, "State", &self.state);
        errors.require(field::ZIP_CODE, "Zip code", &self.zip_code);

        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> TeacherForm {
        TeacherForm {
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@school.edu".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            subject: "Mathematics".to_string(),
            department: "Science".to_string(),
            experience: 8.0,
            qualification: "M.Sc. Mathematics".to_string(),
            join_date: "2016-08-15".to_string(),
            status: TeacherStatus::Active,
            salary: 65000.0,
            street: "123 Oak Street".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        }
    }

    #[test]
    fn test_empty_first_name_is_required() {
        let mut form = filled_form();
        form.first_name = "  ".to_string();

        let errors = form.field_errors();
        assert_eq!(errors.get(field::FIRST_NAME), Some("First name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_blank_form_reports_every_required_field() {
        let errors = TeacherForm::default().field_errors();
        for key in [
            field::FIRST_NAME,
            field::LAST_NAME,
            field::EMAIL,
            field::PHONE,
            field::SUBJECT,
            field::DEPARTMENT,
            field::QUALIFICATION,
            field::JOIN_DATE,
            field::SALARY,
            field::STREET,
            field::CITY,
            field::STATE,
            field::ZIP_CODE,
        ] {
            assert!(errors.has(key), "missing error for {key}");
        }
        // Zero experience is allowed
        assert!(!errors.has(field::EXPERIENCE));
    }

    #[test]
    fn test_email_format() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert_eq!(form.field_errors().get(field::EMAIL), Some("Email is invalid"));

        form.email = "a@b.c".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_numeric_rules() {
        let mut form = filled_form();
        form.experience = -1.0;
        form.salary = 0.0;

        let errors = form.field_errors();
        assert_eq!(errors.get(field::EXPERIENCE), Some("Experience must be positive"));
        assert_eq!(errors.get(field::SALARY), Some("Salary must be greater than 0"));
    }

    #[test]
    fn test_salary_rounding_to_zero_is_rejected() {
        let mut form = filled_form();
        form.salary = 0.4;
        assert_eq!(form.field_errors().get(field::SALARY), Some("Salary must be greater than 0"));
        assert!(form.to_teacher("t-1".to_string()).is_err());

        form.salary = 0.6;
        assert_eq!(form.to_teacher("t-1".to_string()).map(|t| t.salary).ok(), Some(1));
    }

    #[test]
    fn test_to_teacher_trims_and_parses() {
        let mut form = filled_form();
        form.first_name = " Sarah ".to_string();

        let teacher = form.to_teacher("t-1".to_string()).unwrap();
        assert_eq!(teacher.id, "t-1");
        assert_eq!(teacher.full_name(), "Sarah Johnson");
        assert_eq!(teacher.join_date, NaiveDate::from_ymd_opt(2016, 8, 15).unwrap());
        assert_eq!(teacher.salary, 65000);
        assert_eq!(teacher.address.locality(), "Springfield, IL");
        assert_eq!(teacher.initials(), "SJ");
    }

    #[test]
    fn test_to_teacher_rejects_invalid_form() {
        let form = TeacherForm::default();
        let err = form.to_teacher("t-1".to_string()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_form_round_trips_existing_teacher() {
        let teacher = filled_form().to_teacher("t-9".to_string()).unwrap();
        let form = TeacherForm::from_teacher(&teacher);
        assert_eq!(form, filled_form());
    }

    #[test]
    fn test_apply_to_keeps_id_and_avatar() {
        let mut teacher = filled_form().to_teacher("t-2".to_string()).unwrap();
        teacher.avatar = Some("/avatars/sarah.png".to_string());

        let mut form = TeacherForm::from_teacher(&teacher);
        form.status = TeacherStatus::Inactive;
        form.apply_to(&mut teacher).unwrap();

        assert_eq!(teacher.id, "t-2");
        assert_eq!(teacher.status, TeacherStatus::Inactive);
        assert_eq!(teacher.avatar.as_deref(), Some("/avatars/sarah.png"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TeacherStatus::parse("active"), Some(TeacherStatus::Active));
        assert_eq!(TeacherStatus::parse("inactive"), Some(TeacherStatus::Inactive));
        assert_eq!(TeacherStatus::parse("retired"), None);
    }
}
