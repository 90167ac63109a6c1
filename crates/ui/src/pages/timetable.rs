//! Timetable Page Component
//!
//! The weekly grid. Empty cells open a pre-filled new-slot dialog; filled
//! cells can be edited or deleted.

use chrono::{NaiveTime, Weekday};
use dioxus::prelude::*;
use tms_core::SlotId;
use tms_model::TimetableSlot;
use tms_model::catalog::{DAYS, grid_time_slots};

use crate::components::timetable_grid::TimetableGrid;
use crate::state::{APP_STATE, DeleteTarget, Dialog};

/// First free cell in day-major order, for the header's Add button
fn first_free_cell(slots: &[TimetableSlot]) -> Option<(Weekday, NaiveTime)> {
    DAYS.iter().find_map(|day| {
        grid_time_slots()
            .into_iter()
            .find(|start| !slots.iter().any(|s| s.occupies(*day, *start)))
            .map(|start| (*day, start))
    })
}

#[component]
pub fn TimetablePage() -> Element {
    let slots = APP_STATE.read().data.timetable().to_vec();
    let free_cell = first_free_cell(&slots);
    let count = slots.len();

    rsx! {
        div {
            class: "p-8 space-y-6",

            div {
                class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Timetable" }
                    p { class: "text-gray-500 mt-1", "Weekly class schedule ({count} lessons)" }
                }
                if let Some((day, start)) = free_cell {
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| {
                            APP_STATE.write().ui.show_dialog(Dialog::NewSlot { day, start });
                        },
                        "+ Add Slot"
                    }
                }
            }

            TimetableGrid {
                slots: slots,
                on_add: move |(day, start): (Weekday, NaiveTime)| {
                    APP_STATE.write().ui.show_dialog(Dialog::NewSlot { day, start });
                },
                on_edit: move |id: SlotId| {
                    APP_STATE.write().ui.show_dialog(Dialog::EditSlot(id));
                },
                on_delete: move |id: SlotId| {
                    APP_STATE
                        .write()
                        .ui
                        .show_dialog(Dialog::ConfirmDelete(DeleteTarget::Slot(id)));
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tms_model::mock;

    #[test]
    fn test_first_free_cell_on_empty_grid() {
        let cell = first_free_cell(&[]);
        assert_eq!(cell, Some((Weekday::Mon, NaiveTime::from_hms_opt(8, 0, 0).unwrap())));
    }

    #[test]
    fn test_first_free_cell_skips_occupied() {
        let slots = mock::timetable();
        let (day, start) = first_free_cell(&slots).unwrap();
        assert!(!slots.iter().any(|s| s.occupies(day, start)));
    }
}
