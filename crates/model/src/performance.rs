//! Monthly teaching performance metrics

use serde::{Deserialize, Serialize};
use tms_core::{Identifiable, PerformanceId, TeacherId};

/// One teacher's metrics for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub id: PerformanceId,
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub subject: String,
    pub month: String,
    pub year: i32,
    pub students_count: u32,
    /// Out of 100
    pub average_grade: f64,
    /// Out of 100
    pub attendance_rate: f64,
    /// Out of 5
    pub feedback_score: f64,
    pub completed_lessons: u32,
    pub total_lessons: u32,
}

impl PerformanceRecord {
    /// Lessons completed as a percentage; 0 when nothing was planned
    pub fn completion_rate(&self) -> f64 {
        if self.total_lessons == 0 {
            return 0.0;
        }
        f64::from(self.completed_lessons) / f64::from(self.total_lessons) * 100.0
    }

    /// `March 2024`
    pub fn period(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

impl Identifiable for PerformanceRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Bands
// ============================================================================

/// Colour band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// Band for a feedback score out of 5
    pub fn for_feedback(score: f64) -> Self {
        Self::banded(score, [4.5, 4.0, 3.5])
    }

    /// Band for an average grade out of 100
    pub fn for_grade(grade: f64) -> Self {
        Self::banded(grade, [90.0, 80.0, 70.0])
    }

    fn banded(value: f64, [excellent, good, fair]: [f64; 3]) -> Self {
        if value >= excellent {
            ScoreBand::Excellent
        } else if value >= good {
            ScoreBand::Good
        } else if value >= fair {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// Text colour CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "text-green",
            ScoreBand::Good => "text-blue",
            ScoreBand::Fair => "text-yellow",
            ScoreBand::Poor => "text-red",
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Aggregates across a set of records; averages are `None` on an empty set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerformanceSummary {
    pub average_feedback: Option<f64>,
    pub total_students: u32,
    pub average_grade: Option<f64>,
    pub average_completion: Option<f64>,
}

impl PerformanceSummary {
    pub fn from_records(records: &[PerformanceRecord]) -> Self {
        Self {
            average_feedback: mean(records.iter().map(|r| r.feedback_score)),
            total_students: records.iter().map(|r| r.students_count).sum(),
            average_grade: mean(records.iter().map(|r| r.average_grade)),
            average_completion: mean(records.iter().map(PerformanceRecord::completion_rate)),
        }
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    Some(values.sum::<f64>() / count as f64)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(feedback: f64, grade: f64, completed: u32, total: u32) -> PerformanceRecord {
        PerformanceRecord {
            id: "p".to_string(),
            teacher_id: "1".to_string(),
            teacher_name: "Sarah Johnson".to_string(),
            subject: "Mathematics".to_string(),
            month: "March".to_string(),
            year: 2024,
            students_count: 30,
            average_grade: grade,
            attendance_rate: 95.0,
            feedback_score: feedback,
            completed_lessons: completed,
            total_lessons: total,
        }
    }

    #[test]
    fn test_completion_rate() {
        assert_eq!(record(4.0, 80.0, 18, 20).completion_rate(), 90.0);
        assert_eq!(record(4.0, 80.0, 0, 0).completion_rate(), 0.0);
    }

    #[test]
    fn test_summary() {
        let records = vec![record(4.8, 92.0, 20, 20), record(4.2, 84.0, 15, 20)];
        let summary = PerformanceSummary::from_records(&records);

        assert_eq!(summary.total_students, 60);
        assert_eq!(summary.average_grade, Some(88.0));
        assert_eq!(summary.average_completion, Some(87.5));
        let feedback = summary.average_feedback.unwrap();
        assert!((feedback - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_has_no_averages() {
        let summary = PerformanceSummary::from_records(&[]);
        assert_eq!(summary, PerformanceSummary::default());
        assert_eq!(summary.average_feedback, None);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::for_feedback(4.5), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_feedback(4.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_feedback(3.5), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_feedback(3.4), ScoreBand::Poor);
        assert_eq!(ScoreBand::for_grade(90.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_grade(79.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_grade(50.0).css_class(), "text-red");
    }
}
