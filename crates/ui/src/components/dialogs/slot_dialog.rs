//! # Time Slot Dialog Component
//!
//! Add or edit one weekly lesson. A new slot starts with the day and start
//! time of the grid cell that was clicked.

use chrono::{NaiveTime, Weekday};
use dioxus::prelude::*;
use tms_core::format::{format_time_12h, time_input_value};
use tms_core::{FieldErrors, SlotId, Validatable};
use tms_model::catalog::{CLASSES, DAYS, ROOMS, SUBJECTS, day_name, time_slots};
use tms_model::timetable::field;
use tms_model::{SlotForm, Teacher};

use crate::components::inputs::{Select, SelectOption};
use crate::state::{APP_STATE, DeleteTarget, Dialog};

/// Mode for the slot dialog
#[derive(Debug, Clone, PartialEq)]
pub enum SlotDialogMode {
    Create { day: Weekday, start: NaiveTime },
    Edit(SlotId),
}

/// Active teachers, plus the one already assigned to the slot
fn teacher_options(teachers: &[Teacher], assigned: &str) -> Vec<SelectOption> {
    teachers
        .iter()
        .filter(|t| t.is_active() || t.id == assigned)
        .map(|t| SelectOption::new(t.id.clone(), t.picker_label()))
        .collect()
}

fn day_options() -> Vec<SelectOption> {
    DAYS.iter().map(|d| SelectOption::plain(day_name(*d))).collect()
}

fn time_options() -> Vec<SelectOption> {
    time_slots()
        .into_iter()
        .map(|t| SelectOption::new(time_input_value(t), format_time_12h(Some(t))))
        .collect()
}

fn slot_field(
    mut form: Signal<SlotForm>,
    mut errors: Signal<FieldErrors>,
    key: &'static str,
    apply: fn(&mut SlotForm, String),
) -> impl FnMut(String) {
    move |value: String| {
        apply(&mut form.write(), value);
        errors.write().clear_field(key);
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SlotDialogProps {
    pub mode: SlotDialogMode,
}

#[component]
pub fn SlotDialog(props: SlotDialogProps) -> Element {
    let initial_form = match &props.mode {
        SlotDialogMode::Create { day, start } => SlotForm::for_cell(*day, *start),
        SlotDialogMode::Edit(id) => APP_STATE
            .read()
            .data
            .slot(id)
            .map(SlotForm::from_slot)
            .unwrap_or_default(),
    };

    let form = use_signal(|| initial_form);
    let mut errors = use_signal(FieldErrors::new);
    let editing: Option<SlotId> = match &props.mode {
        SlotDialogMode::Create { .. } => None,
        SlotDialogMode::Edit(id) => Some(id.clone()),
    };
    let editing_for_save = editing.clone();

    let mut handle_save = move |_| {
        let current = form.read().clone();
        let field_errors = current.field_errors();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }

        let result = APP_STATE
            .write()
            .save_slot(editing_for_save.as_deref(), &current);
        if let Err(e) = result {
            APP_STATE.write().report_error("Save time slot", &e);
        }
    };

    let handle_cancel = move |_| {
        APP_STATE.write().ui.close_dialog();
    };

    let teachers = teacher_options(APP_STATE.read().data.teachers(), &form.read().teacher_id);
    let title = if editing.is_some() { "Edit Time Slot" } else { "Add Time Slot" };
    let values = form.read();
    let errs = errors.read();

    rsx! {
        div {
            class: "slot-dialog p-6",

            div {
                class: "flex items-center justify-between mb-6",
                h2 { class: "text-xl font-bold text-gray-900", "{title}" }
                button {
                    r#type: "button",
                    class: "text-gray-400 hover:text-gray-600 text-xl",
                    onclick: handle_cancel,
                    "✕"
                }
            }

            form {
                class: "space-y-4",
                onsubmit: move |e| {
                    e.prevent_default();
                    handle_save(());
                },

                Select {
                    value: values.teacher_id.clone(),
                    options: teachers,
                    label: "Teacher",
                    placeholder: "Select teacher",
                    required: true,
                    error: errs.message(field::TEACHER),
                    on_change: slot_field(form, errors, field::TEACHER, |f, v| f.teacher_id = v),
                }

                div {
                    class: "grid grid-cols-2 gap-4",
                    Select {
                        value: values.subject.clone(),
                        options: SelectOption::from_names(SUBJECTS),
                        label: "Subject",
                        placeholder: "Select subject",
                        required: true,
                        error: errs.message(field::SUBJECT),
                        on_change: slot_field(form, errors, field::SUBJECT, |f, v| f.subject = v),
                    }
                    Select {
                        value: values.class_name.clone(),
                        options: SelectOption::from_names(CLASSES),
                        label: "Class",
                        placeholder: "Select class",
                        required: true,
                        error: errs.message(field::CLASS),
                        on_change: slot_field(form, errors, field::CLASS, |f, v| f.class_name = v),
                    }
                    Select {
                        value: values.day.clone(),
                        options: day_options(),
                        label: "Day",
                        required: true,
                        error: errs.message(field::DAY),
                        on_change: slot_field(form, errors, field::DAY, |f, v| f.day = v),
                    }
                    Select {
                        value: values.room.clone(),
                        options: SelectOption::from_names(ROOMS),
                        label: "Room",
                        placeholder: "Select room",
                        required: true,
                        error: errs.message(field::ROOM),
                        on_change: slot_field(form, errors, field::ROOM, |f, v| f.room = v),
                    }
                    Select {
                        value: values.start_time.clone(),
                        options: time_options(),
                        label: "Start Time",
                        required: true,
                        error: errs.message(field::START_TIME),
                        on_change: slot_field(form, errors, field::START_TIME, |f, v| f.start_time = v),
                    }
                    Select {
                        value: values.end_time.clone(),
                        options: time_options(),
                        label: "End Time",
                        placeholder: "Select end time",
                        required: true,
                        error: errs.message(field::END_TIME),
                        on_change: slot_field(form, errors, field::END_TIME, |f, v| f.end_time = v),
                    }
                }

                div {
                    class: "flex items-center justify-between pt-4 border-t border-gray-200",
                    div {
                        if let Some(id) = editing.clone() {
                            button {
                                r#type: "button",
                                class: "btn btn-outline-danger",
                                onclick: move |_| {
                                    APP_STATE
                                        .write()
                                        .ui
                                        .show_dialog(Dialog::ConfirmDelete(DeleteTarget::Slot(id.clone())));
                                },
                                "Delete"
                            }
                        }
                    }
                    div {
                        class: "flex gap-3",
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: handle_cancel,
                            "Cancel"
                        }
                        button { r#type: "submit", class: "btn", "Save Slot" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tms_model::TeacherStatus;
    use tms_model::mock;

    #[test]
    fn test_teacher_options_skip_inactive_unless_assigned() {
        let mut teachers = mock::teachers();
        teachers[1].status = TeacherStatus::Inactive;
        let inactive_id = teachers[1].id.clone();

        let options = teacher_options(&teachers, "");
        assert_eq!(options.len(), teachers.iter().filter(|t| t.is_active()).count());
        assert!(options.iter().all(|o| o.value != inactive_id));

        let options = teacher_options(&teachers, &inactive_id);
        assert!(options.iter().any(|o| o.value == inactive_id));
    }

    #[test]
    fn test_time_options_use_input_values() {
        let options = time_options();
        assert_eq!(options.first().map(|o| o.value.as_str()), Some("08:00"));
        assert_eq!(options.first().map(|o| o.label.as_str()), Some("8:00 AM"));
        assert_eq!(options.len(), 11);
    }

    #[test]
    fn test_day_options_are_school_days() {
        let labels: Vec<String> = day_options().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    }
}
