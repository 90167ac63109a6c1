//! Dashboard Page Component
//!
//! Six headline numbers for today, computed from the school records.

use dioxus::prelude::*;
use tms_core::format::format_one_decimal;
use tms_model::DashboardStats;

use crate::components::performance_dashboard::feedback_label;
use crate::components::stats_card::{StatColor, StatsCard};
use crate::state::APP_STATE;

/// `5 of 8 on staff`
fn staff_caption(stats: &DashboardStats) -> String {
    format!("{} of {} on staff", stats.active_teachers, stats.total_teachers)
}

#[component]
pub fn DashboardPage() -> Element {
    let state = APP_STATE.read();
    let stats = state.data.dashboard_stats(state.today);
    let greeting = state
        .current_user()
        .map(|u| format!("Welcome back, {}", u.name))
        .unwrap_or_else(|| "Welcome back".to_string());
    drop(state);

    let attendance = format!("{}%", format_one_decimal(stats.attendance_rate));

    rsx! {
        div {
            class: "p-8 space-y-6",

            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Dashboard" }
                p { class: "text-gray-500 mt-1", "{greeting}" }
            }

            div {
                class: "grid grid-cols-3 gap-6",
                StatsCard {
                    title: "Active Teachers",
                    value: stats.active_teachers.to_string(),
                    icon: "👩‍🏫",
                    color: StatColor::Blue,
                    subtitle: staff_caption(&stats),
                }
                StatsCard {
                    title: "Classes Today",
                    value: stats.classes_today.to_string(),
                    icon: "📅",
                    color: StatColor::Green,
                }
                StatsCard {
                    title: "Pending Leaves",
                    value: stats.pending_leaves.to_string(),
                    icon: "📝",
                    color: StatColor::Yellow,
                }
                StatsCard {
                    title: "Attendance Rate",
                    value: attendance,
                    icon: "✅",
                    color: StatColor::Purple,
                }
                StatsCard {
                    title: "Avg Feedback",
                    value: feedback_label(stats.average_feedback),
                    icon: "⭐",
                    color: StatColor::Orange,
                }
                StatsCard {
                    title: "Late Arrivals",
                    value: stats.late_arrivals.to_string(),
                    icon: "⏰",
                    color: StatColor::Red,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_staff_caption() {
        let stats = DashboardStats {
            active_teachers: 7,
            total_teachers: 8,
            ..Default::default()
        };
        assert_eq!(staff_caption(&stats), "7 of 8 on staff");
    }
}
