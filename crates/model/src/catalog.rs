//! Fixed option lists used by selects and the timetable grid

use chrono::{NaiveTime, Weekday};

/// Departments offered in the teacher form and filter
pub const DEPARTMENTS: &[&str] = &[
    "Science",
    "Arts",
    "Social Studies",
    "Sports",
    "Mathematics",
];

/// Subjects offered in the teacher form, filter and timetable
pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "History",
    "Geography",
    "Physical Education",
    "Computer Science",
    "Art",
];

/// Class groups
pub const CLASSES: &[&str] = &[
    "Grade 9A", "Grade 9B", "Grade 10A", "Grade 10B", "Grade 11A", "Grade 11B", "Grade 12A",
    "Grade 12B",
];

/// Rooms
pub const ROOMS: &[&str] = &[
    "Room 101",
    "Room 102",
    "Room 103",
    "Room 201",
    "Room 202",
    "Lab 1",
    "Lab 2",
    "Library",
    "Gymnasium",
    "Art Studio",
];

/// School days, in grid column order
pub const DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Number of time slots shown as grid rows
pub const GRID_ROWS: usize = 10;

/// Hourly start times from 08:00 to 18:00
pub fn time_slots() -> Vec<NaiveTime> {
    (8..=18)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect()
}

/// The start times shown as grid rows
pub fn grid_time_slots() -> Vec<NaiveTime> {
    time_slots().into_iter().take(GRID_ROWS).collect()
}

/// Full English day name (`Monday`)
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full day name as used in selects
pub fn parse_day(name: &str) -> Option<Weekday> {
    DAYS.iter().copied().find(|day| day_name(*day) == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_uses_first_ten_slots() {
        let rows = grid_time_slots();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(rows[9], NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(time_slots().len(), 11);
    }

    #[test]
    fn test_day_names() {
        assert_eq!(day_name(Weekday::Wed), "Wednesday");
        assert_eq!(parse_day("Friday"), Some(Weekday::Fri));
        assert_eq!(parse_day("Saturday"), None);
    }
}
