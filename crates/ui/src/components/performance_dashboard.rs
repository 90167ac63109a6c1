//! # Performance Dashboard Component
//!
//! Four headline averages over all records, then one row per teacher with
//! feedback and grade coloured by band, attendance rate, and lesson
//! completion with progress bars.

use dioxus::prelude::*;
use tms_core::format::format_one_decimal;
use tms_model::{PerformanceRecord, PerformanceSummary, ScoreBand};

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::stats_card::{StatColor, StatsCard};

const NOT_AVAILABLE: &str = "N/A";

/// `4.6/5`, or `N/A` without records
pub fn feedback_label(average: Option<f64>) -> String {
    average
        .map(|value| format!("{}/5", format_one_decimal(value)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `87.5%`, or `N/A` without records
pub fn percent_label(average: Option<f64>) -> String {
    average
        .map(|value| format!("{}%", format_one_decimal(value)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Bar width for a value out of `max`, clamped to 0..=100
fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[derive(Props, Clone, PartialEq)]
pub struct PerformanceDashboardProps {
    pub records: Vec<PerformanceRecord>,
}

#[component]
pub fn PerformanceDashboard(props: PerformanceDashboardProps) -> Element {
    let summary = PerformanceSummary::from_records(&props.records);

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "grid grid-cols-4 gap-4",
                StatsCard {
                    title: "Avg Feedback",
                    value: feedback_label(summary.average_feedback),
                    icon: "⭐",
                    color: StatColor::Yellow,
                }
                StatsCard {
                    title: "Total Students",
                    value: summary.total_students.to_string(),
                    icon: "👥",
                    color: StatColor::Blue,
                }
                StatsCard {
                    title: "Avg Grade",
                    value: percent_label(summary.average_grade),
                    icon: "📈",
                    color: StatColor::Green,
                }
                StatsCard {
                    title: "Lesson Completion",
                    value: percent_label(summary.average_completion),
                    icon: "📚",
                    color: StatColor::Purple,
                }
            }

            div {
                class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Teacher Performance" }

                if props.records.is_empty() {
                    p { class: "text-center text-gray-500 py-8", "No performance data available" }
                }

                div {
                    class: "space-y-4",
                    for record in props.records.iter() {
                        PerformanceRow { key: "{record.id}", record: record.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PerformanceRowProps {
    record: PerformanceRecord,
}

#[component]
fn PerformanceRow(props: PerformanceRowProps) -> Element {
    let record = &props.record;
    let feedback_class = ScoreBand::for_feedback(record.feedback_score).css_class();
    let grade_class = ScoreBand::for_grade(record.average_grade).css_class();
    let feedback = format_one_decimal(record.feedback_score);
    let grade = format_one_decimal(record.average_grade);
    let attendance = format_one_decimal(record.attendance_rate);
    let completion_width = bar_width(record.completion_rate(), 100.0);
    let feedback_width = bar_width(record.feedback_score, 5.0);

    rsx! {
        div {
            class: "border border-gray-200 rounded-lg p-4",

            div {
                class: "flex items-center justify-between mb-4",
                div {
                    class: "flex items-center gap-3",
                    Avatar { name: record.teacher_name.clone(), size: AvatarSize::Medium }
                    div {
                        p { class: "font-semibold text-gray-900", "{record.teacher_name}" }
                        p { class: "text-sm text-gray-500", "{record.subject} • {record.period()}" }
                    }
                }
                span { class: "text-sm text-gray-500", "{record.students_count} students" }
            }

            div {
                class: "grid grid-cols-4 gap-4 text-sm",
                div {
                    p { class: "text-gray-500", "Feedback" }
                    p { class: "font-semibold {feedback_class}", "{feedback}/5" }
                }
                div {
                    p { class: "text-gray-500", "Avg Grade" }
                    p { class: "font-semibold {grade_class}", "{grade}%" }
                }
                div {
                    p { class: "text-gray-500", "Attendance" }
                    p { class: "font-semibold text-gray-900", "{attendance}%" }
                }
                div {
                    p { class: "text-gray-500", "Lessons" }
                    p { class: "font-semibold text-gray-900", "{record.completed_lessons}/{record.total_lessons}" }
                }
            }

            div {
                class: "mt-4 space-y-2",
                ProgressBar { label: "Lesson completion", width: completion_width, fill: "bg-blue-500" }
                ProgressBar { label: "Student feedback", width: feedback_width, fill: "bg-yellow-500" }
            }
        }
    }
}

#[component]
fn ProgressBar(label: &'static str, width: f64, fill: &'static str) -> Element {
    let shown = format!("{width:.0}%");

    rsx! {
        div {
            div {
                class: "flex justify-between text-xs text-gray-500 mb-1",
                span { "{label}" }
                span { "{shown}" }
            }
            div {
                class: "w-full h-2 bg-gray-200 rounded-full overflow-hidden",
                div {
                    class: "h-2 rounded-full {fill}",
                    style: "width: {width}%",
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labels_without_records() {
        assert_eq!(feedback_label(None), "N/A");
        assert_eq!(percent_label(None), "N/A");
    }

    #[test]
    fn test_labels_with_values() {
        assert_eq!(feedback_label(Some(4.56)), "4.6/5");
        assert_eq!(percent_label(Some(87.0)), "87.0%");
    }

    #[test]
    fn test_bar_width_is_clamped() {
        assert_eq!(bar_width(2.5, 5.0), 50.0);
        assert_eq!(bar_width(6.0, 5.0), 100.0);
        assert_eq!(bar_width(1.0, 0.0), 0.0);
    }
}
