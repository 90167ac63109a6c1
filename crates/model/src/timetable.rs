//! Weekly timetable slots
//!
//! A slot places one teacher, subject and class in a room for a day and
//! time range. Slots are looked up by grid cell (day + start time); nothing
//! prevents two slots from sharing a cell, the grid simply shows the first.

use crate::catalog::{day_name, parse_day};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tms_core::format::{parse_time, time_input_value};
use tms_core::{FieldErrors, Identifiable, SlotId, TeacherId, TmsError, TmsResult, Validatable};

pub mod field {
    pub const TEACHER: &str = "teacher_id";
    pub const SUBJECT: &str = "subject";
    pub const CLASS: &str = "class_name";
    pub const DAY: &str = "day";
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
    pub const ROOM: &str = "room";
}

// ============================================================================
// Subject Colour
// ============================================================================

/// Legend colour of a subject on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Yellow,
    Gray,
}

impl SubjectColor {
    /// Colour for a subject; subjects outside the legend are gray
    pub fn for_subject(subject: &str) -> Self {
        match subject {
            "Mathematics" => SubjectColor::Blue,
            "Physics" => SubjectColor::Green,
            "Chemistry" => SubjectColor::Purple,
            "English" => SubjectColor::Orange,
            "History" => SubjectColor::Red,
            "Physical Education" => SubjectColor::Yellow,
            _ => SubjectColor::Gray,
        }
    }

    /// CSS modifier class
    pub fn css_class(&self) -> &'static str {
        match self {
            SubjectColor::Blue => "subject-blue",
            SubjectColor::Green => "subject-green",
            SubjectColor::Purple => "subject-purple",
            SubjectColor::Orange => "subject-orange",
            SubjectColor::Red => "subject-red",
            SubjectColor::Yellow => "subject-yellow",
            SubjectColor::Gray => "subject-gray",
        }
    }

    /// Subjects shown in the legend, with their colours
    pub fn legend() -> Vec<(&'static str, SubjectColor)> {
        [
            "Mathematics",
            "Physics",
            "Chemistry",
            "English",
            "History",
            "Physical Education",
        ]
        .into_iter()
        .map(|subject| (subject, SubjectColor::for_subject(subject)))
        .collect()
    }
}

// ============================================================================
// Timetable Slot
// ============================================================================

/// One scheduled lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub id: SlotId,
    pub teacher_id: TeacherId,
    pub subject: String,
    pub class_name: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
}

impl TimetableSlot {
    /// Check if the slot occupies the given grid cell
    pub fn occupies(&self, day: Weekday, start: NaiveTime) -> bool {
        self.day == day && self.start_time == start
    }

    /// `Mathematics - Grade 10A`, used by the delete confirmation
    pub fn summary(&self) -> String {
        format!("{} - {}", self.subject, self.class_name)
    }

    pub fn color(&self) -> SubjectColor {
        SubjectColor::for_subject(&self.subject)
    }
}

impl Identifiable for TimetableSlot {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Slot Form
// ============================================================================

/// Editable form state for the add/edit slot dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotForm {
    pub teacher_id: String,
    pub subject: String,
    pub class_name: String,
    /// Full day name (`Monday`)
    pub day: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub room: String,
}

impl SlotForm {
    /// Empty form with the clicked grid cell pre-filled
    pub fn for_cell(day: Weekday, start: NaiveTime) -> Self {
        Self {
            day: day_name(day).to_string(),
            start_time: time_input_value(start),
            ..Default::default()
        }
    }

    pub fn from_slot(slot: &TimetableSlot) -> Self {
        Self {
            teacher_id: slot.teacher_id.clone(),
            subject: slot.subject.clone(),
            class_name: slot.class_name.clone(),
            day: day_name(slot.day).to_string(),
            start_time: time_input_value(slot.start_time),
            end_time: time_input_value(slot.end_time),
            room: slot.room.clone(),
        }
    }

    /// Build a slot with the given id
    pub fn to_slot(&self, id: SlotId) -> TmsResult<TimetableSlot> {
        self.validate()?;
        let day = parse_day(&self.day)
            .ok_or_else(|| TmsError::field_validation(field::DAY, "Day is invalid"))?;
        Ok(TimetableSlot {
            id,
            teacher_id: self.teacher_id.clone(),
            subject: self.subject.clone(),
            class_name: self.class_name.clone(),
            day,
            start_time: parse_time(&self.start_time)?,
            end_time: parse_time(&self.end_time)?,
            room: self.room.clone(),
        })
    }
}

impl Validatable for SlotForm {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require(field::TEACHER, "Teacher", &self.teacher_id);
        errors.require(field::SUBJECT, "Subject", &self.subject);
        errors.require(field::CLASS, "Class", &self.class_name);

        if self.day.trim().is_empty() {
            errors.add(field::DAY, "Day is required");
        } else if parse_day(&self.day).is_none() {
            errors.add(field::DAY, "Day is invalid");
        }

        let start = if self.start_time.trim().is_empty() {
            errors.add(field::START_TIME, "Start time is required");
            None
        } else {
            let parsed = parse_time(&self.start_time).ok();
            if parsed.is_none() {
                errors.add(field::START_TIME, "Start time is invalid");
            }
            parsed
        };

        if self.end_time.trim().is_empty() {
            errors.add(field::END_TIME, "End time is required");
        } else {
            match parse_time(&self.end_time) {
                Err(_) => errors.add(field::END_TIME, "End time is invalid"),
                Ok(end) => {
                    if start.is_some_and(|start| end <= start) {
                        errors.add(field::END_TIME, "End time must be after start time");
                    }
                }
            }
        }

        errors.require(field::ROOM, "Room", &self.room);
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

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    fn filled_form() -> SlotForm {
        SlotForm {
            teacher_id: "1".to_string(),
            subject: "Mathematics".to_string(),
            class_name: "Grade 10A".to_string(),
            day: "Monday".to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            room: "Room 101".to_string(),
        }
    }

    #[test]
    fn test_for_cell_prefills_day_and_time() {
        let form = SlotForm::for_cell(Weekday::Wed, at(10));
        assert_eq!(form.day, "Wednesday");
        assert_eq!(form.start_time, "10:00");
        assert!(form.end_time.is_empty());
        assert!(form.teacher_id.is_empty());
    }

    #[test]
    fn test_to_slot() {
        let slot = filled_form().to_slot("s1".to_string()).unwrap();
        assert_eq!(slot.day, Weekday::Mon);
        assert!(slot.occupies(Weekday::Mon, at(8)));
        assert!(!slot.occupies(Weekday::Mon, at(9)));
        assert_eq!(slot.summary(), "Mathematics - Grade 10A");
        assert_eq!(SlotForm::from_slot(&slot), filled_form());
    }

    #[test]
    fn test_end_must_follow_start() {
        let mut form = filled_form();
        form.end_time = "08:00".to_string();
        assert_eq!(
            form.field_errors().get(field::END_TIME),
            Some("End time must be after start time")
        );
    }

    #[test]
    fn test_required_fields() {
        let errors = SlotForm::default().field_errors();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(field::TEACHER), Some("Teacher is required"));
        assert_eq!(errors.get(field::ROOM), Some("Room is required"));
    }

    #[test]
    fn test_subject_colors() {
        assert_eq!(SubjectColor::for_subject("Physics"), SubjectColor::Green);
        assert_eq!(SubjectColor::for_subject("Biology"), SubjectColor::Gray);
        assert_eq!(SubjectColor::legend().len(), 6);
        assert_eq!(SubjectColor::Yellow.css_class(), "subject-yellow");
    }
}
