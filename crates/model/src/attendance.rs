//! Daily attendance records

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tms_core::{AttendanceId, Identifiable, TeacherId};

// ============================================================================
// Attendance Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half-day",
        }
    }

    /// Icon shown next to the teacher's name
    pub fn icon(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "✓",
            AttendanceStatus::Absent => "✗",
            AttendanceStatus::Late => "⏰",
            AttendanceStatus::HalfDay => "½",
        }
    }

    /// Badge CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "badge-green",
            AttendanceStatus::Absent => "badge-red",
            AttendanceStatus::Late => "badge-yellow",
            AttendanceStatus::HalfDay => "badge-blue",
        }
    }

    /// Late and half-day count as attended
    pub fn is_attended(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

// ============================================================================
// Attendance Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub total_hours: Option<f64>,
}

impl AttendanceRecord {
    /// Recorded hours, or the span between check-in and check-out
    pub fn hours(&self) -> Option<f64> {
        self.total_hours.or_else(|| match (self.check_in, self.check_out) {
            (Some(start), Some(end)) if end > start => {
                let minutes = (end - start).num_minutes() as f64;
                Some((minutes / 60.0 * 10.0).round() / 10.0)
            }
            _ => None,
        })
    }
}

impl Identifiable for AttendanceRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Per-status counts for one day
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub half_day: usize,
    pub total: usize,
}

impl AttendanceSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a AttendanceRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            match record.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::HalfDay => summary.half_day += 1,
            }
            summary
        })
    }

    /// Percentage attended, rounded to one decimal; 0 with no records
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let attended = (self.present + self.late + self.half_day) as f64;
        (attended / self.total as f64 * 1000.0).round() / 10.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: "a".to_string(),
            teacher_id: "1".to_string(),
            teacher_name: "Sarah Johnson".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            status,
            check_in: NaiveTime::from_hms_opt(8, 0, 0),
            check_out: NaiveTime::from_hms_opt(16, 30, 0),
            total_hours: None,
        }
    }

    #[test]
    fn test_rate_counts_late_and_half_day() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Late),
            record(AttendanceStatus::HalfDay),
            record(AttendanceStatus::Absent),
        ];
        let summary = AttendanceSummary::from_records(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.rate(), 75.0);
    }

    #[test]
    fn test_rate_rounds_to_one_decimal() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Absent),
        ];
        assert_eq!(AttendanceSummary::from_records(&records).rate(), 66.7);
    }

    #[test]
    fn test_empty_rate_is_zero() {
        assert_eq!(AttendanceSummary::default().rate(), 0.0);
    }

    #[test]
    fn test_hours() {
        let mut rec = record(AttendanceStatus::Present);
        assert_eq!(rec.hours(), Some(8.5));

        rec.total_hours = Some(7.0);
        assert_eq!(rec.hours(), Some(7.0));

        let mut absent = record(AttendanceStatus::Absent);
        absent.check_in = None;
        absent.check_out = None;
        assert_eq!(absent.hours(), None);
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(AttendanceStatus::HalfDay.as_str(), "half-day");
        assert_eq!(AttendanceStatus::Late.icon(), "⏰");
        assert!(AttendanceStatus::Late.is_attended());
        assert!(!AttendanceStatus::Absent.is_attended());
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half-day\""
        );
    }
}
