//! Leave requests and the approval workflow
//!
//! Requests arrive `Pending` and move once, to either `Approved` or
//! `Rejected`. A decided request cannot be decided again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tms_core::{Identifiable, LeaveRequestId, TeacherId, TmsError, TmsResult};

// ============================================================================
// Leave Type
// ============================================================================

/// Reason category of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Sick,
    Personal,
    Vacation,
    Emergency,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Vacation => "vacation",
            LeaveType::Emergency => "emergency",
        }
    }

    /// Badge CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            LeaveType::Sick => "badge-red-outline",
            LeaveType::Vacation => "badge-blue-outline",
            LeaveType::Personal => "badge-purple-outline",
            LeaveType::Emergency => "badge-orange-outline",
        }
    }
}

// ============================================================================
// Leave Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    /// Badge CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "badge-yellow",
            LeaveStatus::Approved => "badge-green",
            LeaveStatus::Rejected => "badge-red",
        }
    }

    pub fn is_pending(&self) -> bool {
        *self == LeaveStatus::Pending
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Leave Request
// ============================================================================

/// A teacher's request for time off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub teacher_id: TeacherId,
    /// Denormalized at submission time
    pub teacher_name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
}

impl LeaveRequest {
    /// Inclusive number of days covered, whichever order the dates are in
    pub fn days(&self) -> i64 {
        leave_days(self.start_date, self.end_date)
    }

    /// Approve a pending request
    pub fn approve(&mut self, approver: impl Into<String>, on: NaiveDate) -> TmsResult<()> {
        self.ensure_pending()?;
        self.status = LeaveStatus::Approved;
        self.approved_by = Some(approver.into());
        self.approved_date = Some(on);
        Ok(())
    }

    /// Reject a pending request
    pub fn reject(&mut self) -> TmsResult<()> {
        self.ensure_pending()?;
        self.status = LeaveStatus::Rejected;
        Ok(())
    }

    fn ensure_pending(&self) -> TmsResult<()> {
        if self.status.is_pending() {
            Ok(())
        } else {
            Err(TmsError::LeaveAlreadyDecided {
                id: self.id.clone(),
                status: self.status.to_string(),
            })
        }
    }
}

impl Identifiable for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `|end - start| + 1`
pub fn leave_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

// ============================================================================
// Leave Stats
// ============================================================================

/// Counts shown above the requests table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl LeaveStats {
    pub fn from_requests(requests: &[LeaveRequest]) -> Self {
        requests.iter().fold(
            Self {
                total: requests.len(),
                ..Default::default()
            },
            |mut stats, request| {
                match request.status {
                    LeaveStatus::Pending => stats.pending += 1,
                    LeaveStatus::Approved => stats.approved += 1,
                    LeaveStatus::Rejected => stats.rejected += 1,
                }
                stats
            },
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: "l1".to_string(),
            teacher_id: "1".to_string(),
            teacher_name: "Sarah Johnson".to_string(),
            leave_type: LeaveType::Sick,
            start_date: date(2024, 3, 4),
            end_date: date(2024, 3, 6),
            reason: "Flu".to_string(),
            status,
            applied_date: date(2024, 3, 1),
            approved_by: None,
            approved_date: None,
        }
    }

    #[test]
    fn test_days_is_inclusive_and_symmetric() {
        assert_eq!(leave_days(date(2024, 3, 4), date(2024, 3, 4)), 1);
        assert_eq!(leave_days(date(2024, 3, 4), date(2024, 3, 6)), 3);
        assert_eq!(leave_days(date(2024, 3, 6), date(2024, 3, 4)), 3);
        assert_eq!(request(LeaveStatus::Pending).days(), 3);
    }

    #[test]
    fn test_approve_pending() {
        let mut req = request(LeaveStatus::Pending);
        req.approve("Admin User", date(2024, 3, 2)).unwrap();

        assert_eq!(req.status, LeaveStatus::Approved);
        assert_eq!(req.approved_by.as_deref(), Some("Admin User"));
        assert_eq!(req.approved_date, Some(date(2024, 3, 2)));
    }

    #[test]
    fn test_reject_pending() {
        let mut req = request(LeaveStatus::Pending);
        req.reject().unwrap();
        assert_eq!(req.status, LeaveStatus::Rejected);
        assert_eq!(req.approved_by, None);
    }

    #[test]
    fn test_decided_request_is_final() {
        let mut req = request(LeaveStatus::Rejected);
        let err = req.approve("Admin", date(2024, 3, 2)).unwrap_err();
        assert_eq!(err.to_string(), "Leave request 'l1' is already rejected");
        assert_eq!(req.status, LeaveStatus::Rejected);

        let mut req = request(LeaveStatus::Approved);
        assert!(req.reject().is_err());
    }

    #[test]
    fn test_stats() {
        let requests = vec![
            request(LeaveStatus::Pending),
            request(LeaveStatus::Pending),
            request(LeaveStatus::Approved),
            request(LeaveStatus::Rejected),
        ];
        assert_eq!(
            LeaveStats::from_requests(&requests),
            LeaveStats {
                total: 4,
                pending: 2,
                approved: 1,
                rejected: 1,
            }
        );
        assert_eq!(LeaveStats::from_requests(&[]), LeaveStats::default());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&LeaveType::Emergency).unwrap(), "\"emergency\"");
        assert_eq!(serde_json::to_string(&LeaveStatus::Pending).unwrap(), "\"pending\"");
    }
}
