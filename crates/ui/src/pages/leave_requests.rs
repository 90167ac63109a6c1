//! Leave Requests Page Component
//!
//! Request counts by status, then the requests table. Approve and reject
//! act only on pending requests.

use dioxus::prelude::*;
use tms_core::LeaveRequestId;

use crate::components::leave_requests_table::LeaveRequestsTable;
use crate::components::stats_card::{StatColor, StatsCard};
use crate::state::{APP_STATE, Dialog};

#[component]
pub fn LeaveRequestsPage() -> Element {
    let state = APP_STATE.read();
    let requests = state.data.leave_requests().to_vec();
    let stats = state.data.leave_stats();
    drop(state);

    rsx! {
        div {
            class: "p-8 space-y-6",

            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Leave Requests" }
                p { class: "text-gray-500 mt-1", "Review and manage teacher leave applications" }
            }

            div {
                class: "grid grid-cols-4 gap-4",
                StatsCard { title: "Total Requests", value: stats.total.to_string(), icon: "📋", color: StatColor::Blue }
                StatsCard { title: "Pending", value: stats.pending.to_string(), icon: "⏳", color: StatColor::Yellow }
                StatsCard { title: "Approved", value: stats.approved.to_string(), icon: "✓", color: StatColor::Green }
                StatsCard { title: "Rejected", value: stats.rejected.to_string(), icon: "✕", color: StatColor::Red }
            }

            LeaveRequestsTable {
                requests: requests,
                on_approve: move |id: LeaveRequestId| {
                    let mut state = APP_STATE.write();
                    if let Err(e) = state.approve_leave(&id) {
                        state.report_error("Approve leave", &e);
                    }
                },
                on_reject: move |id: LeaveRequestId| {
                    let mut state = APP_STATE.write();
                    if let Err(e) = state.reject_leave(&id) {
                        state.report_error("Reject leave", &e);
                    }
                },
                on_view: move |id: LeaveRequestId| {
                    APP_STATE.write().ui.show_dialog(Dialog::LeaveDetails(id));
                },
            }
        }
    }
}
