//! Performance Page Component

use dioxus::prelude::*;

use crate::components::performance_dashboard::PerformanceDashboard;
use crate::state::APP_STATE;

#[component]
pub fn PerformancePage() -> Element {
    let records = APP_STATE.read().data.performance().to_vec();

    rsx! {
        div {
            class: "p-8 space-y-6",

            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Performance" }
                p { class: "text-gray-500 mt-1", "Teaching metrics by month" }
            }

            PerformanceDashboard { records: records }
        }
    }
}
