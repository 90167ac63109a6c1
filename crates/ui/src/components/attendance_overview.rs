//! # Attendance Overview Component
//!
//! Five summary cards (present, absent, late, half day, rate) over the
//! records of one day, then the daily list with a date picker. Each row
//! shows the teacher, the date, check-in/check-out times and hours, and a
//! status badge.
//!

use chrono::NaiveDate;
use dioxus::prelude::*;
use tms_core::format::{
    date_input_value, format_one_decimal, format_time_12h, format_weekday_date, parse_date,
};
use tms_model::{AttendanceRecord, AttendanceSummary};

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::stats_card::{StatColor, StatsCard};

#[derive(Props, Clone, PartialEq)]
pub struct AttendanceOverviewProps {
    /// Records of `date`
    pub records: Vec<AttendanceRecord>,

    pub date: NaiveDate,

    #[props(default)]
    pub on_date_change: EventHandler<NaiveDate>,
}

#[component]
pub fn AttendanceOverview(props: AttendanceOverviewProps) -> Element {
    let summary = AttendanceSummary::from_records(&props.records);
    let rate = format!("{}%", format_one_decimal(summary.rate()));
    let date_value = date_input_value(props.date);

    rsx! {
        div {
            class: "space-y-6",

            // Summary cards
            div {
                class: "grid grid-cols-5 gap-4",
                StatsCard { title: "Present", value: summary.present.to_string(), icon: "✓", color: StatColor::Green }
                StatsCard { title: "Absent", value: summary.absent.to_string(), icon: "✗", color: StatColor::Red }
                StatsCard { title: "Late", value: summary.late.to_string(), icon: "⏰", color: StatColor::Yellow }
                StatsCard { title: "Half Day", value: summary.half_day.to_string(), icon: "½", color: StatColor::Blue }
                StatsCard {
                    title: "Attendance Rate",
                    value: rate,
                    icon: "📊",
                    color: StatColor::Purple,
                    subtitle: format!("{} of {} teachers", summary.present + summary.late + summary.half_day, summary.total),
                }
            }

            // Daily list
            div {
                class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",

                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-semibold text-gray-900", "Daily Attendance" }
                    input {
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500/30",
                        r#type: "date",
                        value: "{date_value}",
                        // An incomplete date leaves the selection unchanged
                        oninput: move |e| {
                            if let Ok(date) = parse_date(&e.value()) {
                                props.on_date_change.call(date);
                            }
                        },
                    }
                }

                if props.records.is_empty() {
                    p { class: "text-center text-gray-500 py-8", "No attendance records for this date" }
                }

                div {
                    class: "space-y-3",
                    for record in props.records.iter() {
                        AttendanceRow { key: "{record.id}", record: record.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AttendanceRowProps {
    record: AttendanceRecord,
}

#[component]
fn AttendanceRow(props: AttendanceRowProps) -> Element {
    let record = &props.record;
    let day = format_weekday_date(record.date);
    let check_in = format_time_12h(record.check_in);
    let check_out = format_time_12h(record.check_out);
    let hours = record.hours().map(|h| format!("{}h", format_one_decimal(h)));
    let status_class = record.status.css_class();

    rsx! {
        div {
            class: "flex items-center justify-between p-4 border border-gray-200 rounded-lg hover:bg-gray-50 transition-colors",

            div {
                class: "flex items-center gap-4",
                Avatar { name: record.teacher_name.clone(), size: AvatarSize::Small }
                div {
                    p { class: "font-medium text-gray-900", "{record.teacher_name}" }
                    p { class: "text-sm text-gray-500", "{day}" }
                }
            }

            div {
                class: "flex items-center gap-6",
                if record.check_in.is_some() {
                    div {
                        class: "text-sm text-gray-600 text-right",
                        p { "In: {check_in}" }
                        if record.check_out.is_some() {
                            p { "Out: {check_out}" }
                        }
                        if let Some(hours) = hours {
                            p { class: "text-xs text-gray-400", "{hours}" }
                        }
                    }
                }
                span {
                    class: "badge capitalize {status_class}",
                    "{record.status.icon()} {record.status.as_str()}"
                }
            }
        }
    }
}
