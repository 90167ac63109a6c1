//! In-memory school records
//!
//! `SchoolData` owns every collection the dashboard works on. Records keep
//! insertion order so lists and cards render in the order they were added.
//! Collections are joined only by id; removing a teacher leaves their
//! slots, leave requests and attendance untouched.

use crate::attendance::{AttendanceRecord, AttendanceSummary};
use crate::filter::TeacherFilter;
use crate::leave::{LeaveRequest, LeaveStats};
use crate::mock;
use crate::performance::{PerformanceRecord, PerformanceSummary};
use crate::teacher::{Teacher, TeacherForm};
use crate::timetable::{SlotForm, TimetableSlot};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tms_core::{Identifiable, SlotId, TeacherId, TmsError, TmsResult};
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// Dashboard Stats
// ============================================================================

/// Headline numbers for the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    pub active_teachers: usize,
    pub total_teachers: usize,
    pub classes_today: usize,
    pub pending_leaves: usize,
    /// Percentage for the day, one decimal
    pub attendance_rate: f64,
    /// Mean feedback score out of 5
    pub average_feedback: Option<f64>,
    pub late_arrivals: usize,
}

// ============================================================================
// School Data
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchoolData {
    teachers: Vec<Teacher>,
    timetable: Vec<TimetableSlot>,
    leave_requests: Vec<LeaveRequest>,
    attendance: Vec<AttendanceRecord>,
    performance: Vec<PerformanceRecord>,
}

impl SchoolData {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the mock records, dated around `today`
    pub fn seeded(today: NaiveDate) -> Self {
        let data = Self {
            teachers: mock::teachers(),
            timetable: mock::timetable(),
            leave_requests: mock::leave_requests(today),
            attendance: mock::attendance(today),
            performance: mock::performance(),
        };
        tracing::debug!(
            "Seeded {} teachers, {} slots, {} leave requests",
            data.teachers.len(),
            data.timetable.len(),
            data.leave_requests.len()
        );
        data
    }

    // ========================================================================
    // Teachers
    // ========================================================================

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.matches_id(id))
    }

    /// Teachers passing the filter, in directory order
    pub fn filtered_teachers(&self, filter: &TeacherFilter) -> Vec<&Teacher> {
        let matched = filter.apply(&self.teachers);
        tracing::debug!(
            "Filter matched {} of {} teachers",
            matched.len(),
            self.teachers.len()
        );
        matched
    }

    /// Validate the form and append a new teacher
    pub fn add_teacher(&mut self, form: &TeacherForm) -> TmsResult<TeacherId> {
        let teacher = form.to_teacher(new_id())?;
        let id = teacher.id.clone();
        tracing::info!("Added teacher '{}'", teacher.full_name());
        self.teachers.push(teacher);
        Ok(id)
    }

    /// Validate the form and overwrite the matching teacher
    pub fn update_teacher(&mut self, id: &str, form: &TeacherForm) -> TmsResult<()> {
        let teacher = self
            .teachers
            .iter_mut()
            .find(|t| t.matches_id(id))
            .ok_or_else(|| TmsError::TeacherNotFound(id.to_string()))?;
        form.apply_to(teacher)?;
        tracing::info!("Updated teacher '{}'", teacher.full_name());
        Ok(())
    }

    pub fn remove_teacher(&mut self, id: &str) -> TmsResult<Teacher> {
        let index = self
            .teachers
            .iter()
            .position(|t| t.matches_id(id))
            .ok_or_else(|| TmsError::TeacherNotFound(id.to_string()))?;
        let removed = self.teachers.remove(index);
        tracing::info!("Removed teacher '{}'", removed.full_name());
        Ok(removed)
    }

    // ========================================================================
    // Timetable
    // ========================================================================

    pub fn timetable(&self) -> &[TimetableSlot] {
        &self.timetable
    }

    pub fn slot(&self, id: &str) -> Option<&TimetableSlot> {
        self.timetable.iter().find(|s| s.matches_id(id))
    }

    /// First slot in the given grid cell
    pub fn slot_at(&self, day: Weekday, start: NaiveTime) -> Option<&TimetableSlot> {
        self.timetable.iter().find(|s| s.occupies(day, start))
    }

    pub fn add_slot(&mut self, form: &SlotForm) -> TmsResult<SlotId> {
        let slot = form.to_slot(new_id())?;
        let id = slot.id.clone();
        tracing::info!("Added time slot '{}'", slot.summary());
        self.timetable.push(slot);
        Ok(id)
    }

    pub fn update_slot(&mut self, id: &str, form: &SlotForm) -> TmsResult<()> {
        let slot = self
            .timetable
            .iter_mut()
            .find(|s| s.matches_id(id))
            .ok_or_else(|| TmsError::SlotNotFound(id.to_string()))?;
        *slot = form.to_slot(slot.id.clone())?;
        tracing::info!("Updated time slot '{}'", slot.summary());
        Ok(())
    }

    pub fn remove_slot(&mut self, id: &str) -> TmsResult<TimetableSlot> {
        let index = self
            .timetable
            .iter()
            .position(|s| s.matches_id(id))
            .ok_or_else(|| TmsError::SlotNotFound(id.to_string()))?;
        let removed = self.timetable.remove(index);
        tracing::info!("Removed time slot '{}'", removed.summary());
        Ok(removed)
    }

    // ========================================================================
    // Leave
    // ========================================================================

    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    pub fn leave_request(&self, id: &str) -> Option<&LeaveRequest> {
        self.leave_requests.iter().find(|r| r.matches_id(id))
    }

    fn leave_request_mut(&mut self, id: &str) -> TmsResult<&mut LeaveRequest> {
        self.leave_requests
            .iter_mut()
            .find(|r| r.matches_id(id))
            .ok_or_else(|| TmsError::LeaveRequestNotFound(id.to_string()))
    }

    pub fn approve_leave(&mut self, id: &str, approver: &str, on: NaiveDate) -> TmsResult<()> {
        let request = self.leave_request_mut(id)?;
        request.approve(approver, on)?;
        tracing::info!(
            "Approved leave for '{}' ({} days)",
            request.teacher_name,
            request.days()
        );
        Ok(())
    }

    pub fn reject_leave(&mut self, id: &str) -> TmsResult<()> {
        let request = self.leave_request_mut(id)?;
        request.reject()?;
        tracing::info!("Rejected leave for '{}'", request.teacher_name);
        Ok(())
    }

    pub fn leave_stats(&self) -> LeaveStats {
        LeaveStats::from_requests(&self.leave_requests)
    }

    // ========================================================================
    // Attendance
    // ========================================================================

    pub fn attendance_on(&self, date: NaiveDate) -> Vec<&AttendanceRecord> {
        self.attendance.iter().filter(|r| r.date == date).collect()
    }

    pub fn attendance_summary(&self, date: NaiveDate) -> AttendanceSummary {
        AttendanceSummary::from_records(self.attendance.iter().filter(|r| r.date == date))
    }

    // ========================================================================
    // Performance
    // ========================================================================

    pub fn performance(&self) -> &[PerformanceRecord] {
        &self.performance
    }

    /// Most recent record for a teacher
    pub fn performance_for(&self, teacher_id: &str) -> Option<&PerformanceRecord> {
        self.performance
            .iter()
            .rev()
            .find(|r| r.teacher_id == teacher_id)
    }

    pub fn performance_summary(&self) -> PerformanceSummary {
        PerformanceSummary::from_records(&self.performance)
    }

    // ========================================================================
    // Dashboard
    // ========================================================================

    pub fn dashboard_stats(&self, today: NaiveDate) -> DashboardStats {
        let attendance = self.attendance_summary(today);
        DashboardStats {
            active_teachers: self.teachers.iter().filter(|t| t.is_active()).count(),
            total_teachers: self.teachers.len(),
            classes_today: self
                .timetable
                .iter()
                .filter(|s| s.day == today.weekday())
                .count(),
            pending_leaves: self.leave_stats().pending,
            attendance_rate: attendance.rate(),
            average_feedback: self.performance_summary().average_feedback,
            late_arrivals: attendance.late,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ExperienceBand;
    use crate::leave::LeaveStatus;
    use crate::teacher::TeacherStatus;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        // A Tuesday
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn form() -> TeacherForm {
        TeacherForm {
            first_name: "Nina".to_string(),
            last_name: "Patel".to_string(),
            email: "nina.patel@school.edu".to_string(),
            phone: "+1 (555) 000-1111".to_string(),
            subject: "Geography".to_string(),
            department: "Social Studies".to_string(),
            experience: 1.0,
            qualification: "B.A. Geography".to_string(),
            join_date: "2024-01-08".to_string(),
            status: TeacherStatus::Active,
            salary: 48000.0,
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        }
    }

    #[test]
    fn test_add_teacher_appends_with_fresh_id() {
        let mut data = SchoolData::seeded(today());
        let before = data.teachers().len();

        let id = data.add_teacher(&form()).unwrap();
        assert_eq!(data.teachers().len(), before + 1);
        assert_eq!(data.teachers().last().unwrap().id, id);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_add_invalid_teacher_changes_nothing() {
        let mut data = SchoolData::new();
        let mut bad = form();
        bad.first_name.clear();

        let err = data.add_teacher(&bad).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for 'first_name': First name is required");
        assert!(data.teachers().is_empty());
    }

    #[test]
    fn test_update_teacher_keeps_id() {
        let mut data = SchoolData::seeded(today());
        let mut edited = TeacherForm::from_teacher(data.teacher("1").unwrap());
        edited.last_name = "Miller".to_string();

        data.update_teacher("1", &edited).unwrap();
        assert_eq!(data.teacher("1").unwrap().full_name(), "Sarah Miller");
        assert!(data.update_teacher("missing", &edited).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_teacher() {
        let mut data = SchoolData::seeded(today());
        let removed = data.remove_teacher("2").unwrap();
        assert_eq!(removed.first_name, "Michael");
        assert!(data.teacher("2").is_none());
        assert!(data.remove_teacher("2").unwrap_err().is_not_found());
    }

    #[test]
    fn test_filtered_teachers() {
        let data = SchoolData::seeded(today());
        let filter = TeacherFilter {
            experience: ExperienceBand::Veteran,
            ..Default::default()
        };
        let names: Vec<String> = data
            .filtered_teachers(&filter)
            .iter()
            .map(|t| t.full_name())
            .collect();
        assert_eq!(names, vec!["Michael Chen", "James Wilson"]);
    }

    #[test]
    fn test_slot_crud() {
        let mut data = SchoolData::new();
        let at_ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let mut slot_form = SlotForm::for_cell(Weekday::Thu, at_ten);
        slot_form.teacher_id = "1".to_string();
        slot_form.subject = "Mathematics".to_string();
        slot_form.class_name = "Grade 9A".to_string();
        slot_form.end_time = "11:00".to_string();
        slot_form.room = "Room 101".to_string();

        let id = data.add_slot(&slot_form).unwrap();
        assert_eq!(data.slot_at(Weekday::Thu, at_ten).unwrap().id, id);

        slot_form.room = "Lab 2".to_string();
        data.update_slot(&id, &slot_form).unwrap();
        assert_eq!(data.slot(&id).unwrap().room, "Lab 2");

        data.remove_slot(&id).unwrap();
        assert!(data.slot_at(Weekday::Thu, at_ten).is_none());
        assert!(data.remove_slot(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_approve_and_reject_leave() {
        let mut data = SchoolData::seeded(today());
        let before = data.leave_stats();

        data.approve_leave("l1", "Admin User", today()).unwrap();
        let approved = data.leave_request("l1").unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.approved_date, Some(today()));

        data.reject_leave("l2").unwrap();
        assert!(data.reject_leave("l2").is_err());
        assert!(data.approve_leave("nope", "Admin", today()).unwrap_err().is_not_found());

        let after = data.leave_stats();
        assert_eq!(after.pending, before.pending - 2);
        assert_eq!(after.approved, before.approved + 1);
        assert_eq!(after.rejected, before.rejected + 1);
    }

    #[test]
    fn test_attendance_on_date() {
        let data = SchoolData::seeded(today());
        assert_eq!(data.attendance_on(today()).len(), 7);

        let far = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!(data.attendance_on(far).is_empty());
        assert_eq!(data.attendance_summary(far).rate(), 0.0);
    }

    #[test]
    fn test_dashboard_stats() {
        let data = SchoolData::seeded(today());
        let stats = data.dashboard_stats(today());

        assert_eq!(stats.total_teachers, 8);
        assert_eq!(stats.active_teachers, 7);
        assert_eq!(stats.classes_today, 2);
        assert_eq!(stats.pending_leaves, 3);
        assert_eq!(stats.late_arrivals, 1);
        // 6 of 7 attended
        assert_eq!(stats.attendance_rate, 85.7);
        assert!(stats.average_feedback.is_some());
    }

    #[test]
    fn test_dashboard_stats_on_empty_store() {
        let stats = SchoolData::new().dashboard_stats(today());
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_performance_for_teacher() {
        let data = SchoolData::seeded(today());
        assert_eq!(data.performance_for("3").unwrap().students_count, 30);
        assert!(data.performance_for("8").is_none());
    }
}
