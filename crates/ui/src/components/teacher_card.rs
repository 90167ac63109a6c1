//! # Teacher Card Component
//!
//! One teacher in the directory grid: avatar with status dot, name, subject
//! and department, six contact/profile lines, and Edit/Delete buttons.
//! Clicking anywhere else on the card opens the teacher's profile.

use dioxus::prelude::*;
use tms_core::TeacherId;
use tms_core::format::format_currency;
use tms_model::Teacher;

use crate::components::avatar::{Avatar, AvatarSize};

#[derive(Props, Clone, PartialEq)]
pub struct TeacherCardProps {
    pub teacher: Teacher,

    /// Card body clicked
    #[props(default)]
    pub on_open: EventHandler<TeacherId>,

    #[props(default)]
    pub on_edit: EventHandler<TeacherId>,

    #[props(default)]
    pub on_delete: EventHandler<TeacherId>,
}

#[component]
pub fn TeacherCard(props: TeacherCardProps) -> Element {
    let teacher = &props.teacher;
    let name = teacher.full_name();
    let active = teacher.is_active();
    let status = teacher.status.as_str();
    let salary = format_currency(teacher.salary);
    let locality = teacher.address.locality();

    let open_id = teacher.id.clone();
    let edit_id = teacher.id.clone();
    let delete_id = teacher.id.clone();

    rsx! {
        div {
            class: "teacher-card bg-white rounded-xl border border-gray-200 shadow-sm hover:shadow-md transition-shadow cursor-pointer p-5",
            onclick: move |_| props.on_open.call(open_id.clone()),

            // Header
            div {
                class: "flex items-start justify-between mb-4",

                div {
                    class: "flex items-center gap-4",
                    div {
                        class: "relative",
                        Avatar { name: name.clone(), size: AvatarSize::Medium }
                        span {
                            class: "absolute bottom-0 right-0 w-3 h-3 rounded-full border-2 border-white",
                            class: if active { "bg-green-500" } else { "bg-gray-400" },
                        }
                    }
                    div {
                        h3 { class: "text-lg font-bold text-gray-900", "{name}" }
                        p { class: "text-blue-600 font-medium", "{teacher.subject}" }
                        p { class: "text-sm text-gray-500", "{teacher.department} Department" }
                    }
                }

                span {
                    class: "badge",
                    class: if active { "badge-green" } else { "badge-gray" },
                    "{status}"
                }
            }

            // Details
            div {
                class: "grid grid-cols-2 gap-3 text-sm text-gray-600",
                CardLine { icon: "✉", text: teacher.email.clone() }
                CardLine { icon: "☎", text: teacher.phone.clone() }
                CardLine { icon: "🎓", text: teacher.qualification.clone() }
                CardLine { icon: "📅", text: format!("{} years exp.", teacher.experience) }
                CardLine { icon: "📍", text: locality }
                CardLine { icon: "$", text: salary }
            }

            // Actions
            div {
                class: "flex gap-3 pt-4 mt-4 border-t border-gray-100",
                button {
                    r#type: "button",
                    class: "btn btn-outline flex-1",
                    onclick: move |e| {
                        e.stop_propagation();
                        props.on_edit.call(edit_id.clone());
                    },
                    "✏️ Edit"
                }
                button {
                    r#type: "button",
                    class: "btn btn-outline-danger flex-1",
                    onclick: move |e| {
                        e.stop_propagation();
                        props.on_delete.call(delete_id.clone());
                    },
                    "🗑 Delete"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CardLineProps {
    icon: &'static str,
    text: String,
}

#[component]
fn CardLine(props: CardLineProps) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2 min-w-0",
            span { class: "w-5 text-center text-gray-400", "{props.icon}" }
            span { class: "truncate", "{props.text}" }
        }
    }
}
