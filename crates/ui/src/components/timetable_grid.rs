//! # Timetable Grid Component
//!
//! Weekly grid of days against the first ten time slots of the catalog.
//! A cell shows the slot whose day and start time match it, with edit and
//! delete buttons; an empty cell is a "+" button that opens the add dialog
//! pre-filled with the cell's day and time.
//!

use chrono::{NaiveTime, Weekday};
use dioxus::prelude::*;
use tms_core::SlotId;
use tms_core::format::time_input_value;
use tms_model::catalog::{DAYS, day_name, grid_time_slots};
use tms_model::{SubjectColor, TimetableSlot};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct TimetableGridProps {
    pub slots: Vec<TimetableSlot>,

    /// Empty cell clicked
    #[props(default)]
    pub on_add: EventHandler<(Weekday, NaiveTime)>,

    #[props(default)]
    pub on_edit: EventHandler<SlotId>,

    #[props(default)]
    pub on_delete: EventHandler<SlotId>,
}

// ============================================================================
// Main Component
// ============================================================================

#[component]
pub fn TimetableGrid(props: TimetableGridProps) -> Element {
    let times = grid_time_slots();

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",

            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Weekly Timetable" }

            div {
                class: "overflow-x-auto",
                div {
                    class: "timetable-grid",

                    // Header
                    div { class: "p-3 font-semibold text-gray-700 bg-gray-50 rounded-lg text-center", "Time" }
                    for day in DAYS {
                        div {
                            key: "{day_name(day)}",
                            class: "p-3 font-semibold text-gray-700 bg-gray-50 rounded-lg text-center",
                            "{day_name(day)}"
                        }
                    }

                    // Rows
                    for time in times.iter().copied() {
                        div {
                            key: "label-{time_input_value(time)}",
                            class: "p-3 text-sm font-medium text-gray-600 bg-gray-50 rounded-lg flex items-center justify-center",
                            "{time_input_value(time)}"
                        }
                        for day in DAYS {
                            div {
                                key: "{day_name(day)}-{time_input_value(time)}",
                                class: "timetable-cell",
                                {
                                    match slot_in_cell(&props.slots, day, time) {
                                        Some(slot) => rsx! {
                                            SlotCell {
                                                slot: slot.clone(),
                                                on_edit: props.on_edit,
                                                on_delete: props.on_delete,
                                            }
                                        },
                                        None => rsx! {
                                            button {
                                                r#type: "button",
                                                class: "w-full h-full rounded-lg border-2 border-dashed border-gray-200 text-gray-400 hover:border-blue-300 hover:text-blue-500 hover:bg-blue-50 transition-colors",
                                                title: "Add class",
                                                onclick: move |_| props.on_add.call((day, time)),
                                                "+"
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }

            SubjectLegend {}
        }
    }
}

// ============================================================================
// Slot Cell
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct SlotCellProps {
    slot: TimetableSlot,
    on_edit: EventHandler<SlotId>,
    on_delete: EventHandler<SlotId>,
}

#[component]
fn SlotCell(props: SlotCellProps) -> Element {
    let slot = &props.slot;
    let color = slot.color().css_class();
    let edit_id = slot.id.clone();
    let delete_id = slot.id.clone();

    rsx! {
        div {
            class: "slot-card h-full rounded-lg border p-2 text-xs {color}",

            div { class: "font-semibold truncate", "{slot.subject}" }
            div { class: "truncate", "{slot.class_name}" }
            div { class: "truncate opacity-75", "{slot.room}" }

            div {
                class: "flex justify-end gap-1 mt-1",
                button {
                    r#type: "button",
                    class: "px-1 rounded hover:bg-white",
                    title: "Edit",
                    onclick: move |_| props.on_edit.call(edit_id.clone()),
                    "✏️"
                }
                button {
                    r#type: "button",
                    class: "px-1 rounded hover:bg-white",
                    title: "Delete",
                    onclick: move |_| props.on_delete.call(delete_id.clone()),
                    "🗑"
                }
            }
        }
    }
}

// ============================================================================
// Legend
// ============================================================================

#[component]
fn SubjectLegend() -> Element {
    rsx! {
        div {
            class: "mt-6 pt-4 border-t border-gray-100",
            h3 { class: "text-sm font-medium text-gray-700 mb-2", "Subjects" }
            div {
                class: "flex flex-wrap gap-2",
                for (subject, color) in SubjectColor::legend() {
                    span {
                        key: "{subject}",
                        class: "px-2 py-1 rounded-full border text-xs font-medium {color.css_class()}",
                        "{subject}"
                    }
                }
            }
        }
    }
}

/// The slot shown in a grid cell
fn slot_in_cell(slots: &[TimetableSlot], day: Weekday, start: NaiveTime) -> Option<&TimetableSlot> {
    slots.iter().find(|slot| slot.occupies(day, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tms_model::mock;

    #[test]
    fn test_slot_in_cell() {
        let slots = mock::timetable();
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        assert_eq!(slot_in_cell(&slots, Weekday::Mon, eight).map(|s| s.id.as_str()), Some("t1"));
        assert!(slot_in_cell(&slots, Weekday::Tue, nine).is_none());
    }

    #[test]
    fn test_every_seeded_slot_fits_the_grid() {
        let times = grid_time_slots();
        for slot in mock::timetable() {
            assert!(DAYS.contains(&slot.day));
            assert!(times.contains(&slot.start_time), "{} starts off-grid", slot.id);
        }
    }
}
