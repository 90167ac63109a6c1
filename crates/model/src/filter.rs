//! Teacher search and filter
//!
//! The teachers page combines a free-text search with four select filters.
//! All conditions must hold for a teacher to be listed.

use crate::teacher::{Teacher, TeacherStatus};
use serde::{Deserialize, Serialize};

/// Select value meaning "no filter" for department and subject
pub const ALL: &str = "All";

// ============================================================================
// Status Filter
// ============================================================================

/// Status select on the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn all() -> &'static [StatusFilter] {
        &[StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive]
    }

    fn matches(&self, status: TeacherStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == TeacherStatus::Active,
            StatusFilter::Inactive => status == TeacherStatus::Inactive,
        }
    }
}

// ============================================================================
// Experience Band
// ============================================================================

/// Years-of-experience bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExperienceBand {
    #[default]
    All,
    /// 0 to 2 years
    Junior,
    /// 3 to 5 years
    Mid,
    /// 6 to 10 years
    Senior,
    /// More than 10 years
    Veteran,
}

impl ExperienceBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBand::All => "All",
            ExperienceBand::Junior => "0-2",
            ExperienceBand::Mid => "3-5",
            ExperienceBand::Senior => "6-10",
            ExperienceBand::Veteran => "10+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBand::All => "All Experience",
            ExperienceBand::Junior => "0-2 years",
            ExperienceBand::Mid => "3-5 years",
            ExperienceBand::Senior => "6-10 years",
            ExperienceBand::Veteran => "10+ years",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "0-2" => ExperienceBand::Junior,
            "3-5" => ExperienceBand::Mid,
            "6-10" => ExperienceBand::Senior,
            "10+" => ExperienceBand::Veteran,
            _ => ExperienceBand::All,
        }
    }

    pub fn all() -> &'static [ExperienceBand] {
        &[
            ExperienceBand::All,
            ExperienceBand::Junior,
            ExperienceBand::Mid,
            ExperienceBand::Senior,
            ExperienceBand::Veteran,
        ]
    }

    /// Check if a number of years falls in this band
    pub fn contains(&self, years: u32) -> bool {
        match self {
            ExperienceBand::All => true,
            ExperienceBand::Junior => years <= 2,
            ExperienceBand::Mid => (3..=5).contains(&years),
            ExperienceBand::Senior => (6..=10).contains(&years),
            ExperienceBand::Veteran => years > 10,
        }
    }
}

// ============================================================================
// Teacher Filter
// ============================================================================

/// Search text plus the four select filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherFilter {
    pub search: String,
    pub department: String,
    pub subject: String,
    pub status: StatusFilter,
    pub experience: ExperienceBand,
}

impl Default for TeacherFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: ALL.to_string(),
            subject: ALL.to_string(),
            status: StatusFilter::All,
            experience: ExperienceBand::All,
        }
    }
}

impl TeacherFilter {
    /// Check a teacher against the search text and every filter
    pub fn matches(&self, teacher: &Teacher) -> bool {
        self.matches_search(teacher)
            && (self.department == ALL || teacher.department == self.department)
            && (self.subject == ALL || teacher.subject == self.subject)
            && self.status.matches(teacher.status)
            && self.experience.contains(teacher.experience)
    }

    fn matches_search(&self, teacher: &Teacher) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &teacher.first_name,
            &teacher.last_name,
            &teacher.email,
            &teacher.subject,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Number of non-default filters, plus one for a non-empty search
    pub fn active_count(&self) -> usize {
        [
            self.department != ALL,
            self.subject != ALL,
            self.status != StatusFilter::All,
            self.experience != ExperienceBand::All,
            !self.search.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Check if anything narrows the list
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Reset the filters and the search text
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply to a list, keeping order
    pub fn apply<'a>(&self, teachers: &'a [Teacher]) -> Vec<&'a Teacher> {
        teachers.iter().filter(|t| self.matches(t)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teacher::Address;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn teacher(first: &str, subject: &str, department: &str, experience: u32) -> Teacher {
        Teacher {
            id: first.to_lowercase(),
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@school.edu", first.to_lowercase()),
            phone: "555".to_string(),
            subject: subject.to_string(),
            department: department.to_string(),
            experience,
            qualification: "B.Ed.".to_string(),
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            status: TeacherStatus::Active,
            avatar: None,
            salary: 50000,
            address: Address::default(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let t = teacher("Sarah", "Mathematics", "Science", 8);
        let mut filter = TeacherFilter::default();

        filter.search = "SARAH".to_string();
        assert!(filter.matches(&t));

        filter.search = "math".to_string();
        assert!(filter.matches(&t));

        filter.search = "SCHOOL.EDU".to_string();
        assert!(filter.matches(&t));

        filter.search = "physics".to_string();
        assert!(!filter.matches(&t));
    }

    #[test]
    fn test_search_ignores_department() {
        let t = teacher("Sarah", "Mathematics", "Science", 8);
        let filter = TeacherFilter {
            search: "science".to_string(),
            ..Default::default()
        };
        assert!(!filter.matches(&t));
    }

    #[test]
    fn test_experience_band_boundaries() {
        assert!(ExperienceBand::Junior.contains(0));
        assert!(ExperienceBand::Junior.contains(2));
        assert!(!ExperienceBand::Junior.contains(3));
        assert!(ExperienceBand::Mid.contains(3));
        assert!(ExperienceBand::Mid.contains(5));
        assert!(ExperienceBand::Senior.contains(6));
        assert!(ExperienceBand::Senior.contains(10));
        assert!(!ExperienceBand::Veteran.contains(10));
        assert!(ExperienceBand::Veteran.contains(11));
    }

    #[test]
    fn test_filters_combine() {
        let teachers = vec![
            teacher("Sarah", "Mathematics", "Science", 8),
            teacher("Mike", "Physics", "Science", 12),
            teacher("Emma", "English", "Arts", 3),
        ];
        let filter = TeacherFilter {
            department: "Science".to_string(),
            experience: ExperienceBand::Veteran,
            ..Default::default()
        };

        let names: Vec<&str> = filter
            .apply(&teachers)
            .iter()
            .map(|t| t.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Mike"]);
    }

    #[test]
    fn test_status_filter() {
        let mut t = teacher("Sarah", "Mathematics", "Science", 8);
        t.status = TeacherStatus::Inactive;

        let mut filter = TeacherFilter::default();
        filter.status = StatusFilter::Active;
        assert!(!filter.matches(&t));
        filter.status = StatusFilter::Inactive;
        assert!(filter.matches(&t));
    }

    #[test]
    fn test_active_count_and_clear() {
        let mut filter = TeacherFilter::default();
        assert_eq!(filter.active_count(), 0);

        filter.search = "a".to_string();
        filter.subject = "Physics".to_string();
        filter.status = StatusFilter::Inactive;
        assert_eq!(filter.active_count(), 3);
        assert!(filter.is_active());

        filter.clear();
        assert_eq!(filter, TeacherFilter::default());
    }

    #[test]
    fn test_select_values_parse() {
        assert_eq!(ExperienceBand::parse("10+"), ExperienceBand::Veteran);
        assert_eq!(ExperienceBand::parse("bogus"), ExperienceBand::All);
        assert_eq!(StatusFilter::parse("active"), StatusFilter::Active);
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
    }
}
