//! Attendance Page Component
//!
//! Daily attendance for the date picked on the page; today by default.

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::attendance_overview::AttendanceOverview;
use crate::state::APP_STATE;

#[component]
pub fn AttendancePage() -> Element {
    let state = APP_STATE.read();
    let date = state.attendance_date;
    let records: Vec<_> = state.data.attendance_on(date).into_iter().cloned().collect();
    drop(state);

    rsx! {
        div {
            class: "p-8 space-y-6",

            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Attendance" }
                p { class: "text-gray-500 mt-1", "Track daily teacher attendance" }
            }

            AttendanceOverview {
                records: records,
                date: date,
                on_date_change: move |date: NaiveDate| {
                    tracing::debug!("Attendance date set to {}", date);
                    APP_STATE.write().attendance_date = date;
                },
            }
        }
    }
}
