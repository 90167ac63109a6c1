//! # Confirm Delete Dialog Component
//!
//! Confirms removal of a teacher or a timetable slot. Records are joined
//! by id only, so deleting a teacher leaves their slots and requests.

use dioxus::prelude::*;

use crate::state::{APP_STATE, DeleteTarget};

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    pub target: DeleteTarget,

    #[props(default)]
    pub on_confirm: EventHandler<()>,

    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

/// Title and question for a delete target
fn delete_text(target: &DeleteTarget) -> (&'static str, &'static str) {
    match target {
        DeleteTarget::Teacher(_) => (
            "Delete Teacher",
            "Are you sure you want to delete this teacher? This action cannot be undone.",
        ),
        DeleteTarget::Slot(_) => (
            "Delete Time Slot",
            "Are you sure you want to delete this time slot?",
        ),
    }
}

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let mut is_deleting = use_signal(|| false);
    let (title, message) = delete_text(&props.target);
    let item_name = APP_STATE.read().delete_label(&props.target);
    let target = props.target.clone();

    let handle_delete = move |_| {
        is_deleting.set(true);
        let result = APP_STATE.write().confirm_delete(&target);
        is_deleting.set(false);
        match result {
            Ok(()) => props.on_confirm.call(()),
            Err(e) => {
                let mut state = APP_STATE.write();
                state.ui.close_dialog();
                state.report_error("Delete", &e);
            }
        }
    };

    let handle_cancel = move |_| {
        APP_STATE.write().ui.close_dialog();
        props.on_cancel.call(());
    };

    let deleting = *is_deleting.read();

    rsx! {
        div {
            class: "confirm-delete-dialog p-6",

            div {
                class: "flex items-start gap-4 mb-6",
                div {
                    class: "flex-shrink-0 w-12 h-12 rounded-full bg-red-100 flex items-center justify-center",
                    span { class: "text-2xl", "⚠️" }
                }
                div {
                    class: "flex-1",
                    h2 { class: "text-xl font-bold text-red-600 mb-2", "{title}" }
                    p { class: "text-gray-600", "{message}" }
                }
            }

            if let Some(name) = item_name {
                div {
                    class: "mb-6 p-3 bg-gray-50 rounded-lg border border-gray-200",
                    span { class: "text-gray-500 mr-2", "Item:" }
                    span { class: "font-medium text-gray-900", "{name}" }
                }
            }

            div {
                class: "flex justify-end gap-3",
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    disabled: deleting,
                    onclick: handle_cancel,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg transition-colors disabled:opacity-50",
                    disabled: deleting,
                    onclick: handle_delete,
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_text_per_target() {
        let (title, _) = delete_text(&DeleteTarget::Teacher("1".to_string()));
        assert_eq!(title, "Delete Teacher");
        let (title, message) = delete_text(&DeleteTarget::Slot("t1".to_string()));
        assert_eq!(title, "Delete Time Slot");
        assert!(message.contains("time slot"));
    }
}
