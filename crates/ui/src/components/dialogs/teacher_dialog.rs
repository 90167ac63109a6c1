//! # Teacher Dialog Component
//!
//! Dialog for adding and editing teachers.
//!
//! ## Features
//!
//! - Personal, professional and address sections
//! - Department and subject picked from the school catalog
//! - Inline validation messages; editing a field clears its message
//!

use dioxus::prelude::*;
use tms_core::{FieldErrors, TeacherId, Validatable};
use tms_model::catalog::{DEPARTMENTS, SUBJECTS};
use tms_model::teacher::field;
use tms_model::{TeacherForm, TeacherStatus};

use crate::components::inputs::{NumberInput, Select, SelectOption, TextInput};
use crate::state::APP_STATE;

// ============================================================================
// Types
// ============================================================================

/// Mode for the teacher dialog
#[derive(Debug, Clone, PartialEq)]
pub enum TeacherDialogMode {
    Create,
    Edit(TeacherId),
}

impl TeacherDialogMode {
    fn editing_id(&self) -> Option<&str> {
        match self {
            TeacherDialogMode::Create => None,
            TeacherDialogMode::Edit(id) => Some(id),
        }
    }
}

fn status_options() -> Vec<SelectOption> {
    TeacherStatus::all()
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

/// Handler that writes one text field and clears its error
fn text_field(
    mut form: Signal<TeacherForm>,
    mut errors: Signal<FieldErrors>,
    key: &'static str,
    apply: fn(&mut TeacherForm, String),
) -> impl FnMut(String) {
    move |value: String| {
        apply(&mut form.write(), value);
        errors.write().clear_field(key);
    }
}

fn number_field(
    mut form: Signal<TeacherForm>,
    mut errors: Signal<FieldErrors>,
    key: &'static str,
    apply: fn(&mut TeacherForm, f64),
) -> impl FnMut(f64) {
    move |value: f64| {
        apply(&mut form.write(), value);
        errors.write().clear_field(key);
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct TeacherDialogProps {
    pub mode: TeacherDialogMode,

    #[props(default)]
    pub on_save: EventHandler<TeacherId>,

    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Add/edit teacher dialog
#[component]
pub fn TeacherDialog(props: TeacherDialogProps) -> Element {
    let initial_form = match &props.mode {
        TeacherDialogMode::Create => TeacherForm::default(),
        TeacherDialogMode::Edit(id) => APP_STATE
            .read()
            .data
            .teacher(id)
            .map(TeacherForm::from_teacher)
            .unwrap_or_default(),
    };

    let form = use_signal(|| initial_form);
    let mut errors = use_signal(FieldErrors::new);
    let mode_for_save = props.mode.clone();

    let mut handle_save = move |_| {
        let current = form.read().clone();
        let field_errors = current.field_errors();
        if !field_errors.is_empty() {
            tracing::debug!("Teacher form has {} invalid fields", field_errors.len());
            errors.set(field_errors);
            return;
        }

        let result = APP_STATE
            .write()
            .save_teacher(mode_for_save.editing_id(), &current);
        match result {
            Ok(id) => props.on_save.call(id),
            Err(e) => APP_STATE.write().report_error("Save teacher", &e),
        }
    };

    let handle_cancel = move |_| {
        APP_STATE.write().ui.close_dialog();
        props.on_cancel.call(());
    };

    let (title, save_text) = match &props.mode {
        TeacherDialogMode::Create => ("Add New Teacher", "Add Teacher"),
        TeacherDialogMode::Edit(_) => ("Edit Teacher", "Save Changes"),
    };

    let values = form.read();
    let errs = errors.read();

    rsx! {
        div {
            class: "teacher-dialog p-6 max-h-[85vh] overflow-y-auto",

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
                class: "space-y-6",
                onsubmit: move |e| {
                    e.prevent_default();
                    handle_save(());
                },

                // Personal
                div {
                    class: "space-y-4",
                    h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider", "Personal Information" }
                    div {
                        class: "grid grid-cols-2 gap-4",
                        TextInput {
                            value: values.first_name.clone(),
                            label: "First Name",
                            required: true,
                            error: errs.message(field::FIRST_NAME),
                            on_change: text_field(form, errors, field::FIRST_NAME, |f, v| f.first_name = v),
                        }
                        TextInput {
                            value: values.last_name.clone(),
                            label: "Last Name",
                            required: true,
                            error: errs.message(field::LAST_NAME),
                            on_change: text_field(form, errors, field::LAST_NAME, |f, v| f.last_name = v),
                        }
                        TextInput {
                            value: values.email.clone(),
                            label: "Email",
                            input_type: "email",
                            required: true,
                            error: errs.message(field::EMAIL),
                            on_change: text_field(form, errors, field::EMAIL, |f, v| f.email = v),
                        }
                        TextInput {
                            value: values.phone.clone(),
                            label: "Phone",
                            input_type: "tel",
                            required: true,
                            error: errs.message(field::PHONE),
                            on_change: text_field(form, errors, field::PHONE, |f, v| f.phone = v),
                        }
                    }
                }

                // Professional
                div {
                    class: "space-y-4",
                    h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider", "Professional Information" }
                    div {
                        class: "grid grid-cols-2 gap-4",
                        Select {
                            value: values.department.clone(),
                            options: SelectOption::from_names(DEPARTMENTS),
                            label: "Department",
                            placeholder: "Select department",
                            required: true,
                            error: errs.message(field::DEPARTMENT),
                            on_change: text_field(form, errors, field::DEPARTMENT, |f, v| f.department = v),
                        }
                        Select {
                            value: values.subject.clone(),
                            options: SelectOption::from_names(SUBJECTS),
                            label: "Subject",
                            placeholder: "Select subject",
                            required: true,
                            error: errs.message(field::SUBJECT),
                            on_change: text_field(form, errors, field::SUBJECT, |f, v| f.subject = v),
                        }
                        NumberInput {
                            value: values.experience,
                            label: "Experience",
                            min: 0.0,
                            unit: "years",
                            required: true,
                            error: errs.message(field::EXPERIENCE),
                            on_change: number_field(form, errors, field::EXPERIENCE, |f, v| f.experience = v),
                        }
                        TextInput {
                            value: values.qualification.clone(),
                            label: "Qualification",
                            placeholder: "e.g., M.Sc. Mathematics",
                            required: true,
                            error: errs.message(field::QUALIFICATION),
                            on_change: text_field(form, errors, field::QUALIFICATION, |f, v| f.qualification = v),
                        }
                        TextInput {
                            value: values.join_date.clone(),
                            label: "Join Date",
                            input_type: "date",
                            required: true,
                            error: errs.message(field::JOIN_DATE),
                            on_change: text_field(form, errors, field::JOIN_DATE, |f, v| f.join_date = v),
                        }
                        Select {
                            value: values.status.as_str().to_string(),
                            options: status_options(),
                            label: "Status",
                            on_change: text_field(form, errors, "status", |f, v| {
                                if let Some(status) = TeacherStatus::parse(&v) {
                                    f.status = status;
                                }
                            }),
                        }
                        NumberInput {
                            value: values.salary,
                            label: "Annual Salary",
                            min: 0.0,
                            step: 1000.0,
                            unit: "$",
                            required: true,
                            error: errs.message(field::SALARY),
                            on_change: number_field(form, errors, field::SALARY, |f, v| f.salary = v),
                        }
                    }
                }

                // Address
                div {
                    class: "space-y-4",
                    h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider", "Address" }
                    TextInput {
                        value: values.street.clone(),
                        label: "Street",
                        required: true,
                        error: errs.message(field::STREET),
                        on_change: text_field(form, errors, field::STREET, |f, v| f.street = v),
                    }
                    div {
                        class: "grid grid-cols-3 gap-4",
                        TextInput {
                            value: values.city.clone(),
                            label: "City",
                            required: true,
                            error: errs.message(field::CITY),
                            on_change: text_field(form, errors, field::CITY, |f, v| f.city = v),
                        }
                        TextInput {
                            value: values.state.clone(),
                            label: "State",
                            required: true,
                            error: errs.message(field::STATE),
                            on_change: text_field(form, errors, field::STATE, |f, v| f.state = v),
                        }
                        TextInput {
                            value: values.zip_code.clone(),
                            label: "Zip Code",
                            required: true,
                            error: errs.message(field::ZIP_CODE),
                            on_change: text_field(form, errors, field::ZIP_CODE, |f, v| f.zip_code = v),
                        }
                    }
                }

                if !errs.is_empty() {
                    p {
                        class: "text-sm text-red-600",
                        "Please correct the highlighted fields."
                    }
                }

                div {
                    class: "flex justify-end gap-3 pt-4 border-t border-gray-200",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: handle_cancel,
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn",
                        "{save_text}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_options_cover_both_states() {
        let options = status_options();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["active", "inactive"]);
    }

    #[test]
    fn test_editing_id() {
        assert_eq!(TeacherDialogMode::Create.editing_id(), None);
        assert_eq!(
            TeacherDialogMode::Edit("3".to_string()).editing_id(),
            Some("3")
        );
    }
}
