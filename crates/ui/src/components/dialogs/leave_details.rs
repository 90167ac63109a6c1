//! # Leave Details Dialog Component
//!
//! Full view of one leave request. Pending requests can be approved or
//! rejected from here as well as from the table.

use dioxus::prelude::*;
use tms_core::LeaveRequestId;
use tms_core::format::format_date_long;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::leave_requests_table::{approval_label, duration_label};
use crate::state::APP_STATE;

#[derive(Props, Clone, PartialEq)]
pub struct LeaveDetailsDialogProps {
    pub request_id: LeaveRequestId,
}

#[component]
pub fn LeaveDetailsDialog(props: LeaveDetailsDialogProps) -> Element {
    let request = APP_STATE.read().data.leave_request(&props.request_id).cloned();

    let close = move |_| {
        APP_STATE.write().ui.close_dialog();
    };

    let Some(request) = request else {
        return rsx! {
            div {
                class: "p-6",
                p { class: "text-gray-600 mb-4", "This leave request no longer exists." }
                div {
                    class: "flex justify-end",
                    button { r#type: "button", class: "btn btn-outline", onclick: close, "Close" }
                }
            }
        };
    };

    let approve_id = request.id.clone();
    let reject_id = request.id.clone();
    let handle_approve = move |_| {
        let mut state = APP_STATE.write();
        match state.approve_leave(&approve_id) {
            Ok(()) => state.ui.close_dialog(),
            Err(e) => state.report_error("Approve leave", &e),
        }
    };
    let handle_reject = move |_| {
        let mut state = APP_STATE.write();
        match state.reject_leave(&reject_id) {
            Ok(()) => state.ui.close_dialog(),
            Err(e) => state.report_error("Reject leave", &e),
        }
    };

    let duration = duration_label(&request);
    let applied = format_date_long(request.applied_date);
    let approval = approval_label(&request);
    let pending = request.status.is_pending();

    rsx! {
        div {
            class: "leave-details-dialog p-6",

            div {
                class: "flex items-center gap-3 mb-6",
                Avatar { name: request.teacher_name.clone(), size: AvatarSize::Large }
                div {
                    h2 { class: "text-xl font-bold text-gray-900", "{request.teacher_name}" }
                    div {
                        class: "flex gap-2 mt-1",
                        span { class: "badge {request.leave_type.css_class()} capitalize", "{request.leave_type.as_str()}" }
                        span { class: "badge {request.status.css_class()} capitalize", "{request.status}" }
                    }
                }
            }

            dl {
                class: "space-y-3 text-sm",
                div {
                    dt { class: "text-gray-500", "Duration" }
                    dd { class: "text-gray-900", "{duration}" }
                }
                div {
                    dt { class: "text-gray-500", "Reason" }
                    dd { class: "text-gray-900", "{request.reason}" }
                }
                div {
                    dt { class: "text-gray-500", "Applied on" }
                    dd { class: "text-gray-900", "{applied}" }
                }
                if let Some(approval) = approval {
                    div {
                        dt { class: "text-gray-500", "Approved by" }
                        dd { class: "text-gray-900", "{approval}" }
                    }
                }
            }

            div {
                class: "flex justify-end gap-3 mt-6 pt-4 border-t border-gray-200",
                button { r#type: "button", class: "btn btn-outline", onclick: close, "Close" }
                if pending {
                    button {
                        r#type: "button",
                        class: "btn btn-outline-danger",
                        onclick: handle_reject,
                        "✕ Reject"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline-success",
                        onclick: handle_approve,
                        "✓ Approve"
                    }
                }
            }
        }
    }
}
