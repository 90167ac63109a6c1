//! Teacher Detail Page Component
//!
//! One teacher's profile: contact and professional information, and quick
//! stats from their most recent performance record.

use dioxus::prelude::*;
use tms_core::format::{format_currency, format_date_long, format_one_decimal};
use tms_model::{PerformanceRecord, Teacher};

use crate::components::avatar::{Avatar, AvatarSize};
use crate::state::{APP_STATE, DeleteTarget, Dialog, Page};

#[component]
pub fn TeacherDetailPage() -> Element {
    let state = APP_STATE.read();
    let teacher = state.detail_teacher().cloned();
    let performance = teacher
        .as_ref()
        .and_then(|t| state.data.performance_for(&t.id))
        .cloned();
    drop(state);

    let back = move |_| {
        APP_STATE.write().ui.navigate(Page::Teachers);
    };

    let Some(teacher) = teacher else {
        return rsx! {
            div {
                class: "p-8 text-center",
                h2 { class: "text-xl font-semibold text-gray-900 mb-2", "Teacher not found" }
                p { class: "text-gray-500 mb-4", "This teacher may have been deleted." }
                button { r#type: "button", class: "btn btn-outline", onclick: back, "← Back to Teachers" }
            }
        };
    };

    let edit_id = teacher.id.clone();
    let delete_id = teacher.id.clone();
    let active = teacher.is_active();
    let address = format!("{}, {} {}", teacher.address.street, teacher.address.locality(), teacher.address.zip_code);

    rsx! {
        div {
            class: "p-8 space-y-6",

            div {
                class: "flex items-center justify-between",
                button { r#type: "button", class: "btn btn-outline", onclick: back, "← Back to Teachers" }
                div {
                    class: "flex gap-3",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| {
                            APP_STATE.write().ui.show_dialog(Dialog::EditTeacher(edit_id.clone()));
                        },
                        "✏️ Edit"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline-danger",
                        onclick: move |_| {
                            APP_STATE
                                .write()
                                .ui
                                .show_dialog(Dialog::ConfirmDelete(DeleteTarget::Teacher(delete_id.clone())));
                        },
                        "🗑️ Delete"
                    }
                }
            }

            // Profile header
            div {
                class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6 flex items-center gap-6",
                Avatar { name: teacher.full_name(), size: AvatarSize::Large }
                div {
                    class: "flex-1",
                    h1 { class: "text-2xl font-bold text-gray-900", "{teacher.full_name()}" }
                    p { class: "text-gray-500", "{teacher.subject} • {teacher.department}" }
                }
                span {
                    class: "badge",
                    class: if active { "badge-green" } else { "badge-gray" },
                    "{teacher.status.label()}"
                }
            }

            div {
                class: "grid grid-cols-3 gap-6",

                div {
                    class: "col-span-2 space-y-6",
                    InfoSection {
                        title: "Contact Information",
                        rows: vec![
                            ("Email", teacher.email.clone()),
                            ("Phone", teacher.phone.clone()),
                            ("Address", address),
                        ],
                    }
                    InfoSection {
                        title: "Professional Information",
                        rows: professional_rows(&teacher),
                    }
                }

                QuickStats { record: performance }
            }
        }
    }
}

fn professional_rows(teacher: &Teacher) -> Vec<(&'static str, String)> {
    vec![
        ("Qualification", teacher.qualification.clone()),
        ("Experience", format!("{} years", teacher.experience)),
        ("Department", teacher.department.clone()),
        ("Join Date", format_date_long(teacher.join_date)),
        ("Salary", format_currency(teacher.salary)),
    ]
}

/// Label/value pairs for the quick stats panel
fn quick_stats(record: &PerformanceRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Feedback", format!("{}/5", format_one_decimal(record.feedback_score))),
        ("Avg Grade", format!("{}%", format_one_decimal(record.average_grade))),
        ("Attendance", format!("{}%", format_one_decimal(record.attendance_rate))),
        ("Students", record.students_count.to_string()),
        ("Lessons", format!("{}/{}", record.completed_lessons, record.total_lessons)),
    ]
}

#[component]
fn InfoSection(title: &'static str, rows: Vec<(&'static str, String)>) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "{title}" }
            dl {
                class: "grid grid-cols-2 gap-4",
                for (label, value) in rows.iter() {
                    div {
                        key: "{label}",
                        dt { class: "text-sm text-gray-500", "{label}" }
                        dd { class: "text-gray-900 font-medium", "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickStats(record: Option<PerformanceRecord>) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Stats" }
            {match record {
                Some(record) => rsx! {
                    p { class: "text-xs text-gray-500 mb-3", "{record.period()}" }
                    div {
                        class: "space-y-3",
                        for (label, value) in quick_stats(&record) {
                            div {
                                key: "{label}",
                                class: "flex justify-between",
                                span { class: "text-sm text-gray-500", "{label}" }
                                span { class: "font-semibold text-gray-900", "{value}" }
                            }
                        }
                    }
                },
                None => rsx! {
                    p { class: "text-sm text-gray-500", "No performance data yet" }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tms_model::mock;

    #[test]
    fn test_professional_rows_format_values() {
        let teacher = &mock::teachers()[0];
        let rows = professional_rows(teacher);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].1, format!("{} years", teacher.experience));
        assert!(rows[4].1.starts_with('$'));
    }

    #[test]
    fn test_quick_stats_labels() {
        let record = &mock::performance()[0];
        let labels: Vec<&str> = quick_stats(record).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Feedback", "Avg Grade", "Attendance", "Students", "Lessons"]);
    }
}
