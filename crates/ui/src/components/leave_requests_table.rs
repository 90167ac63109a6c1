//! # Leave Requests Table Component
//!
//! One row per request: teacher avatar and name, type and status badges,
//! the date range with its inclusive day count, the reason, when it was
//! applied for and, once approved, by whom. Pending rows carry Approve and
//! Reject buttons next to View.
//!

use dioxus::prelude::*;
use tms_core::LeaveRequestId;
use tms_core::format::format_date_short;
use tms_model::{LeaveRequest, LeaveStatus};

use crate::components::avatar::{Avatar, AvatarSize};

#[derive(Props, Clone, PartialEq)]
pub struct LeaveRequestsTableProps {
    pub requests: Vec<LeaveRequest>,

    #[props(default)]
    pub on_approve: EventHandler<LeaveRequestId>,

    #[props(default)]
    pub on_reject: EventHandler<LeaveRequestId>,

    #[props(default)]
    pub on_view: EventHandler<LeaveRequestId>,
}

#[component]
pub fn LeaveRequestsTable(props: LeaveRequestsTableProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",

            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "📅 Leave Requests" }

            if props.requests.is_empty() {
                p { class: "text-center text-gray-500 py-8", "No leave requests" }
            }

            div {
                class: "space-y-4",
                for request in props.requests.iter() {
                    LeaveRow {
                        key: "{request.id}",
                        request: request.clone(),
                        on_approve: props.on_approve,
                        on_reject: props.on_reject,
                        on_view: props.on_view,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LeaveRowProps {
    request: LeaveRequest,
    on_approve: EventHandler<LeaveRequestId>,
    on_reject: EventHandler<LeaveRequestId>,
    on_view: EventHandler<LeaveRequestId>,
}

#[component]
fn LeaveRow(props: LeaveRowProps) -> Element {
    let request = &props.request;
    let duration = duration_label(request);
    let applied = format_date_short(request.applied_date);
    let approval = approval_label(request);
    let pending = request.status.is_pending();
    let type_class = request.leave_type.css_class();
    let status_class = request.status.css_class();

    let view_id = request.id.clone();
    let approve_id = request.id.clone();
    let reject_id = request.id.clone();

    rsx! {
        div {
            class: "flex items-start justify-between gap-4 p-4 border border-gray-200 rounded-lg hover:bg-gray-50 transition-colors",

            div {
                class: "flex items-start gap-4 min-w-0",
                Avatar { name: request.teacher_name.clone(), size: AvatarSize::Small }

                div {
                    class: "min-w-0",
                    div {
                        class: "flex items-center gap-2 mb-2",
                        h3 { class: "font-semibold text-gray-900", "{request.teacher_name}" }
                        span { class: "badge capitalize {type_class}", "{request.leave_type.as_str()}" }
                        span { class: "badge capitalize {status_class}", "{request.status}" }
                    }
                    div {
                        class: "space-y-1 text-sm text-gray-600",
                        p { span { class: "font-semibold", "Duration: " } "{duration}" }
                        p { span { class: "font-semibold", "Reason: " } "{request.reason}" }
                        p { span { class: "font-semibold", "Applied: " } "{applied}" }
                        if let Some(approval) = approval {
                            p { span { class: "font-semibold", "Approved by: " } "{approval}" }
                        }
                    }
                }
            }

            div {
                class: "flex gap-2 flex-shrink-0",
                button {
                    r#type: "button",
                    class: "btn btn-outline btn-sm",
                    title: "View details",
                    onclick: move |_| props.on_view.call(view_id.clone()),
                    "👁"
                }
                if pending {
                    button {
                        r#type: "button",
                        class: "btn btn-outline-success btn-sm",
                        title: "Approve",
                        onclick: move |_| props.on_approve.call(approve_id.clone()),
                        "✓"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline-danger btn-sm",
                        title: "Reject",
                        onclick: move |_| props.on_reject.call(reject_id.clone()),
                        "✕"
                    }
                }
            }
        }
    }
}

/// `Mar 6, 2024 - Mar 7, 2024 (2 days)`
pub fn duration_label(request: &LeaveRequest) -> String {
    format!(
        "{} - {} ({} days)",
        format_date_short(request.start_date),
        format_date_short(request.end_date),
        request.days()
    )
}

/// `Admin on Mar 1, 2024` for approved requests
pub fn approval_label(request: &LeaveRequest) -> Option<String> {
    if request.status != LeaveStatus::Approved {
        return None;
    }
    let by = request.approved_by.as_deref()?;
    Some(match request.approved_date {
        Some(date) => format!("{} on {}", by, format_date_short(date)),
        None => by.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tms_model::mock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_duration_label_counts_inclusively() {
        let mut request = mock::leave_requests(today()).remove(0);
        request.start_date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        request.end_date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(duration_label(&request), "Mar 6, 2024 - Mar 7, 2024 (2 days)");
    }

    #[test]
    fn test_approval_label_only_for_approved() {
        let mut request = mock::leave_requests(today()).remove(0);
        assert_eq!(approval_label(&request), None);

        request.approve("Admin User", today()).unwrap();
        assert_eq!(
            approval_label(&request).as_deref(),
            Some("Admin User on Mar 5, 2024")
        );
    }
}
