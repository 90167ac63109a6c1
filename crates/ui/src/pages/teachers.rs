//! Teachers Page Component
//!
//! Search and filter panel, a count heading, and the teacher card grid.
//! The empty state tells "nothing matches" apart from "no teachers yet".

use dioxus::prelude::*;
use tms_model::{Teacher, TeacherFilter};

use crate::components::search_filters::SearchFilters;
use crate::components::teacher_card::TeacherCard;
use crate::state::{APP_STATE, DeleteTarget, Dialog};

/// What to show when the grid is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmptyState {
    NoTeachers,
    NoMatches,
}

fn empty_state(total: usize, shown: usize) -> Option<EmptyState> {
    match (total, shown) {
        (0, _) => Some(EmptyState::NoTeachers),
        (_, 0) => Some(EmptyState::NoMatches),
        _ => None,
    }
}

/// `Teachers (3)`, or `Teachers (3 of 8)` while filtering
fn count_heading(total: usize, shown: usize) -> String {
    if shown == total {
        format!("Teachers ({})", total)
    } else {
        format!("Teachers ({} of {})", shown, total)
    }
}

#[component]
pub fn TeachersPage() -> Element {
    let state = APP_STATE.read();
    let filter = state.teacher_filter.clone();
    let total = state.data.teachers().len();
    let teachers: Vec<Teacher> = state
        .data
        .filtered_teachers(&filter)
        .into_iter()
        .cloned()
        .collect();
    drop(state);

    let empty = empty_state(total, teachers.len());
    let heading = count_heading(total, teachers.len());

    let add_teacher = move |_| {
        APP_STATE.write().ui.show_dialog(Dialog::NewTeacher);
    };

    rsx! {
        div {
            class: "p-8 space-y-6",

            div {
                class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Teachers" }
                    p { class: "text-gray-500 mt-1", "Manage teaching staff and their records" }
                }
                button { r#type: "button", class: "btn", onclick: add_teacher, "+ Add Teacher" }
            }

            SearchFilters {
                filter: filter,
                on_change: move |updated: TeacherFilter| {
                    tracing::debug!("Teacher filter changed ({} active)", updated.active_count());
                    APP_STATE.write().teacher_filter = updated;
                },
            }

            h2 { class: "text-lg font-semibold text-gray-900", "{heading}" }

            {match empty {
                Some(EmptyState::NoTeachers) => rsx! {
                    div {
                        class: "text-center py-16 bg-white rounded-xl border border-gray-200",
                        div { class: "text-5xl mb-4", "👩‍🏫" }
                        h3 { class: "text-lg font-medium text-gray-900", "No teachers yet" }
                        p { class: "text-gray-500 mt-1 mb-4", "Add your first teacher to get started." }
                        button { r#type: "button", class: "btn", onclick: add_teacher, "+ Add Teacher" }
                    }
                },
                Some(EmptyState::NoMatches) => rsx! {
                    div {
                        class: "text-center py-16 bg-white rounded-xl border border-gray-200",
                        div { class: "text-5xl mb-4", "🔍" }
                        h3 { class: "text-lg font-medium text-gray-900", "No teachers found" }
                        p { class: "text-gray-500 mt-1", "Try adjusting your search or filters." }
                    }
                },
                None => rsx! {
                    div {
                        class: "grid grid-cols-3 gap-6",
                        for teacher in teachers.into_iter() {
                            TeacherCard {
                                key: "{teacher.id}",
                                teacher: teacher.clone(),
                                on_open: move |id: String| APP_STATE.write().ui.open_teacher(id),
                                on_edit: move |id: String| {
                                    APP_STATE.write().ui.show_dialog(Dialog::EditTeacher(id));
                                },
                                on_delete: move |id: String| {
                                    APP_STATE
                                        .write()
                                        .ui
                                        .show_dialog(Dialog::ConfirmDelete(DeleteTarget::Teacher(id)));
                                },
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_state_distinguishes_causes() {
        assert_eq!(empty_state(0, 0), Some(EmptyState::NoTeachers));
        assert_eq!(empty_state(8, 0), Some(EmptyState::NoMatches));
        assert_eq!(empty_state(8, 3), None);
    }

    #[test]
    fn test_count_heading() {
        assert_eq!(count_heading(8, 8), "Teachers (8)");
        assert_eq!(count_heading(8, 3), "Teachers (3 of 8)");
    }
}
