//! Seed records loaded when the window opens
//!
//! Dates that should look current (attendance, leave) are placed relative to
//! the reference day passed in, normally today.

use crate::attendance::{AttendanceRecord, AttendanceStatus};
use crate::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::performance::PerformanceRecord;
use crate::teacher::{Address, Teacher, TeacherStatus};
use crate::timetable::TimetableSlot;
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};

struct TeacherSeed {
    id: &'static str,
    first: &'static str,
    last: &'static str,
    phone: &'static str,
    subject: &'static str,
    department: &'static str,
    experience: u32,
    qualification: &'static str,
    joined: (i32, u32, u32),
    status: TeacherStatus,
    salary: u64,
    street: &'static str,
    city: &'static str,
    state: &'static str,
    zip: &'static str,
}

const TEACHERS: &[TeacherSeed] = &[
    TeacherSeed {
        id: "1",
        first: "Sarah",
        last: "Johnson",
        phone: "+1 (555) 123-4567",
        subject: "Mathematics",
        department: "Mathematics",
        experience: 8,
        qualification: "M.Sc. Mathematics",
        joined: (2016, 8, 15),
        status: TeacherStatus::Active,
        salary: 65000,
        street: "123 Oak Street",
        city: "Springfield",
        state: "IL",
        zip: "62701",
    },
    TeacherSeed {
        id: "2",
        first: "Michael",
        last: "Chen",
        phone: "+1 (555) 234-5678",
        subject: "Physics",
        department: "Science",
        experience: 12,
        qualification: "Ph.D. Physics",
        joined: (2012, 1, 10),
        status: TeacherStatus::Active,
        salary: 78000,
        street: "456 Maple Avenue",
        city: "Springfield",
        state: "IL",
        zip: "62702",
    },
    TeacherSeed {
        id: "3",
        first: "Emily",
        last: "Davis",
        phone: "+1 (555) 345-6789",
        subject: "English",
        department: "Arts",
        experience: 5,
        qualification: "M.A. English Literature",
        joined: (2019, 9, 1),
        status: TeacherStatus::Active,
        salary: 58000,
        street: "789 Pine Road",
        city: "Chatham",
        state: "IL",
        zip: "62629",
    },
    TeacherSeed {
        id: "4",
        first: "James",
        last: "Wilson",
        phone: "+1 (555) 456-7890",
        subject: "History",
        department: "Social Studies",
        experience: 15,
        qualification: "M.A. History",
        joined: (2009, 8, 20),
        status: TeacherStatus::Active,
        salary: 72000,
        street: "321 Elm Street",
        city: "Rochester",
        state: "IL",
        zip: "62563",
    },
    TeacherSeed {
        id: "5",
        first: "Lisa",
        last: "Anderson",
        phone: "+1 (555) 567-8901",
        subject: "Chemistry",
        department: "Science",
        experience: 2,
        qualification: "M.Sc. Chemistry",
        joined: (2022, 8, 15),
        status: TeacherStatus::Active,
        salary: 52000,
        street: "654 Cedar Lane",
        city: "Springfield",
        state: "IL",
        zip: "62704",
    },
    TeacherSeed {
        id: "6",
        first: "David",
        last: "Martinez",
        phone: "+1 (555) 678-9012",
        subject: "Physical Education",
        department: "Sports",
        experience: 7,
        qualification: "B.Sc. Sports Science",
        joined: (2017, 3, 1),
        status: TeacherStatus::Active,
        salary: 55000,
        street: "987 Birch Boulevard",
        city: "Sherman",
        state: "IL",
        zip: "62684",
    },
    TeacherSeed {
        id: "7",
        first: "Rachel",
        last: "Thompson",
        phone: "+1 (555) 789-0123",
        subject: "Biology",
        department: "Science",
        experience: 4,
        qualification: "M.Sc. Biology",
        joined: (2020, 8, 24),
        status: TeacherStatus::Inactive,
        salary: 56000,
        street: "147 Walnut Drive",
        city: "Springfield",
        state: "IL",
        zip: "62703",
    },
    TeacherSeed {
        id: "8",
        first: "Robert",
        last: "Brown",
        phone: "+1 (555) 890-1234",
        subject: "Computer Science",
        department: "Mathematics",
        experience: 10,
        qualification: "M.S. Computer Science",
        joined: (2014, 1, 6),
        status: TeacherStatus::Active,
        salary: 70000,
        street: "258 Spruce Court",
        city: "Petersburg",
        state: "IL",
        zip: "62675",
    },
];

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn days_from(day: NaiveDate, offset: i64) -> NaiveDate {
    let shifted = if offset >= 0 {
        day.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        day.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(day)
}

/// The staff directory
pub fn teachers() -> Vec<Teacher> {
    TEACHERS
        .iter()
        .map(|seed| Teacher {
            id: seed.id.to_string(),
            first_name: seed.first.to_string(),
            last_name: seed.last.to_string(),
            email: format!(
                "{}.{}@school.edu",
                seed.first.to_lowercase(),
                seed.last.to_lowercase()
            ),
            phone: seed.phone.to_string(),
            subject: seed.subject.to_string(),
            department: seed.department.to_string(),
            experience: seed.experience,
            qualification: seed.qualification.to_string(),
            join_date: ymd(seed.joined.0, seed.joined.1, seed.joined.2),
            status: seed.status,
            avatar: None,
            salary: seed.salary,
            address: Address::new(seed.street, seed.city, seed.state, seed.zip),
        })
        .collect()
}

fn teacher_name(id: &str) -> String {
    TEACHERS
        .iter()
        .find(|seed| seed.id == id)
        .map(|seed| format!("{} {}", seed.first, seed.last))
        .unwrap_or_default()
}

/// Weekly lessons
pub fn timetable() -> Vec<TimetableSlot> {
    let rows: &[(&str, &str, &str, &str, Weekday, u32, &str)] = &[
        ("t1", "1", "Mathematics", "Grade 10A", Weekday::Mon, 8, "Room 101"),
        ("t2", "2", "Physics", "Grade 11A", Weekday::Mon, 9, "Lab 1"),
        ("t3", "3", "English", "Grade 9B", Weekday::Mon, 10, "Room 102"),
        ("t4", "5", "Chemistry", "Grade 12A", Weekday::Tue, 8, "Lab 2"),
        ("t5", "4", "History", "Grade 10B", Weekday::Tue, 11, "Room 201"),
        ("t6", "6", "Physical Education", "Grade 9A", Weekday::Wed, 9, "Gymnasium"),
        ("t7", "1", "Mathematics", "Grade 11B", Weekday::Wed, 13, "Room 101"),
        ("t8", "3", "English", "Grade 12B", Weekday::Thu, 10, "Library"),
        ("t9", "8", "Computer Science", "Grade 11A", Weekday::Thu, 14, "Lab 1"),
        ("t10", "2", "Physics", "Grade 12A", Weekday::Fri, 8, "Lab 1"),
        ("t11", "4", "History", "Grade 9A", Weekday::Fri, 12, "Room 202"),
        ("t12", "6", "Physical Education", "Grade 10A", Weekday::Fri, 15, "Gymnasium"),
    ];
    rows.iter()
        .map(|&(id, teacher, subject, class, day, hour, room)| TimetableSlot {
            id: id.to_string(),
            teacher_id: teacher.to_string(),
            subject: subject.to_string(),
            class_name: class.to_string(),
            day,
            start_time: hm(hour, 0),
            end_time: hm(hour + 1, 0),
            room: room.to_string(),
        })
        .collect()
}

/// Requests around the reference day
pub fn leave_requests(today: NaiveDate) -> Vec<LeaveRequest> {
    let rows: &[(&str, &str, LeaveType, i64, i64, &str, LeaveStatus, i64)] = &[
        ("l1", "3", LeaveType::Sick, 1, 2, "Medical appointment and recovery", LeaveStatus::Pending, -1),
        ("l2", "2", LeaveType::Vacation, 14, 18, "Family vacation", LeaveStatus::Pending, -3),
        ("l3", "4", LeaveType::Personal, -6, -6, "Personal matters", LeaveStatus::Approved, -10),
        ("l4", "6", LeaveType::Emergency, -3, -2, "Family emergency", LeaveStatus::Approved, -4),
        ("l5", "5", LeaveType::Vacation, -20, -15, "Conference travel", LeaveStatus::Rejected, -30),
        ("l6", "8", LeaveType::Personal, 7, 7, "Moving house", LeaveStatus::Pending, -2),
    ];
    rows.iter()
        .map(|&(id, teacher, leave_type, start, end, reason, status, applied)| {
            let approved = status == LeaveStatus::Approved;
            LeaveRequest {
                id: id.to_string(),
                teacher_id: teacher.to_string(),
                teacher_name: teacher_name(teacher),
                leave_type,
                start_date: days_from(today, start),
                end_date: days_from(today, end),
                reason: reason.to_string(),
                status,
                applied_date: days_from(today, applied),
                approved_by: approved.then(|| "Admin".to_string()),
                approved_date: approved.then(|| days_from(today, applied + 1)),
            }
        })
        .collect()
}

/// One record per active teacher for the reference day and the day before
pub fn attendance(today: NaiveDate) -> Vec<AttendanceRecord> {
    type Row = (&'static str, AttendanceStatus, Option<(u32, u32)>, Option<(u32, u32)>);
    let today_rows: &[Row] = &[
        ("1", AttendanceStatus::Present, Some((7, 55)), Some((16, 0))),
        ("2", AttendanceStatus::Present, Some((8, 0)), Some((16, 30))),
        ("3", AttendanceStatus::Late, Some((9, 15)), Some((16, 30))),
        ("4", AttendanceStatus::Present, Some((7, 45)), Some((15, 45))),
        ("5", AttendanceStatus::Absent, None, None),
        ("6", AttendanceStatus::HalfDay, Some((8, 0)), Some((12, 0))),
        ("8", AttendanceStatus::Present, Some((8, 5)), None),
    ];
    let yesterday_rows: &[Row] = &[
        ("1", AttendanceStatus::Present, Some((8, 0)), Some((16, 0))),
        ("2", AttendanceStatus::Late, Some((8, 40)), Some((16, 30))),
        ("3", AttendanceStatus::Present, Some((7, 50)), Some((16, 0))),
        ("4", AttendanceStatus::Present, Some((7, 45)), Some((16, 15))),
        ("5", AttendanceStatus::Present, Some((8, 0)), Some((16, 0))),
        ("6", AttendanceStatus::Present, Some((7, 30)), Some((15, 30))),
        ("8", AttendanceStatus::Absent, None, None),
    ];

    let build = |date: NaiveDate, rows: &[Row]| -> Vec<AttendanceRecord> {
        rows.iter()
            .map(|&(teacher, status, check_in, check_out)| AttendanceRecord {
                id: format!("a{}-{}", date.ordinal(), teacher),
                teacher_id: teacher.to_string(),
                teacher_name: teacher_name(teacher),
                date,
                status,
                check_in: check_in.map(|(h, m)| hm(h, m)),
                check_out: check_out.map(|(h, m)| hm(h, m)),
                total_hours: None,
            })
            .collect()
    };

    let mut records = build(today, today_rows);
    records.extend(build(days_from(today, -1), yesterday_rows));
    records
}

/// Last month's metrics
pub fn performance() -> Vec<PerformanceRecord> {
    let rows: &[(&str, &str, u32, f64, f64, f64, u32, u32)] = &[
        ("p1", "1", 32, 87.5, 96.2, 4.7, 20, 22),
        ("p2", "2", 28, 84.3, 94.8, 4.5, 19, 20),
        ("p3", "3", 30, 89.1, 97.5, 4.8, 22, 22),
        ("p4", "4", 27, 81.6, 92.1, 4.2, 18, 20),
        ("p5", "5", 25, 76.4, 90.3, 3.9, 15, 20),
        ("p6", "6", 35, 91.2, 95.0, 4.6, 20, 20),
    ];
    rows.iter()
        .map(
            |&(id, teacher, students, grade, attendance, feedback, completed, total)| {
                let subject = TEACHERS
                    .iter()
                    .find(|seed| seed.id == teacher)
                    .map(|seed| seed.subject)
                    .unwrap_or_default();
                PerformanceRecord {
                    id: id.to_string(),
                    teacher_id: teacher.to_string(),
                    teacher_name: teacher_name(teacher),
                    subject: subject.to_string(),
                    month: "March".to_string(),
                    year: 2024,
                    students_count: students,
                    average_grade: grade,
                    attendance_rate: attendance,
                    feedback_score: feedback,
                    completed_lessons: completed,
                    total_lessons: total,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use tms_core::Validatable;

    #[test]
    fn test_seed_teachers_are_valid() {
        let teachers = teachers();
        assert_eq!(teachers.len(), 8);
        for teacher in &teachers {
            let form = crate::teacher::TeacherForm::from_teacher(teacher);
            assert!(form.is_valid(), "{} fails validation", teacher.id);
        }
        let ids: HashSet<_> = teachers.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), teachers.len());
    }

    #[test]
    fn test_attendance_is_relative_to_reference_day() {
        let today = ymd(2024, 3, 5);
        let records = attendance(today);
        assert_eq!(records.iter().filter(|r| r.date == today).count(), 7);
        assert!(records.iter().any(|r| r.date == ymd(2024, 3, 4)));
        assert_eq!(records[0].teacher_name, "Sarah Johnson");
    }

    #[test]
    fn test_only_approved_leave_has_approver() {
        for request in leave_requests(ymd(2024, 3, 5)) {
            assert_eq!(
                request.approved_by.is_some(),
                request.status == LeaveStatus::Approved
            );
        }
    }

    #[test]
    fn test_timetable_fits_grid() {
        let rows = crate::catalog::grid_time_slots();
        for slot in timetable() {
            assert!(rows.contains(&slot.start_time), "{} off grid", slot.id);
            assert!(slot.end_time > slot.start_time);
        }
    }
}
