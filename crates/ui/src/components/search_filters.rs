//! # Search Filters Component
//!
//! Search box, a Filters toggle carrying the active-filter count, a Clear
//! button, and the collapsible panel of department/subject/status/experience
//! selects. The component owns only whether the panel is open; the filter
//! itself is passed in and every edit is reported through `on_change`.

use dioxus::prelude::*;
use tms_model::catalog::{DEPARTMENTS, SUBJECTS};
use tms_model::filter::ALL;
use tms_model::{ExperienceBand, StatusFilter, TeacherFilter};

use crate::components::inputs::{Select, SelectOption, TextInput};

#[derive(Props, Clone, PartialEq)]
pub struct SearchFiltersProps {
    pub filter: TeacherFilter,

    #[props(default)]
    pub on_change: EventHandler<TeacherFilter>,
}

#[component]
pub fn SearchFilters(props: SearchFiltersProps) -> Element {
    let mut show_filters = use_signal(|| false);
    let active_count = props.filter.active_count();
    let on_change = props.on_change;
    let edit = |apply: fn(&mut TeacherFilter, String)| edit_handler(&props.filter, on_change, apply);

    let clear = {
        let current = props.filter.clone();
        move |_| {
            let mut next = current.clone();
            next.clear();
            props.on_change.call(next);
        }
    };

    rsx! {
        div {
            class: "space-y-4",

            div {
                class: "bg-white rounded-xl border border-gray-200 shadow-sm p-4 flex gap-4 items-center",

                div {
                    class: "flex-1",
                    TextInput {
                        value: props.filter.search.clone(),
                        placeholder: "Search teachers by name, email, or subject...".to_string(),
                        prefix: "🔍".to_string(),
                        on_change: edit(|f, v| f.search = v),
                    }
                }

                button {
                    r#type: "button",
                    class: "btn btn-outline flex items-center gap-2",
                    class: if show_filters() { "bg-blue-50 border-blue-300 text-blue-700" } else { "" },
                    onclick: move |_| show_filters.toggle(),
                    "⚙ Filters"
                    if active_count > 0 {
                        span {
                            class: "ml-1 px-2 py-0.5 bg-blue-600 text-white text-xs rounded-full",
                            "{active_count}"
                        }
                    }
                }

                if active_count > 0 {
                    button {
                        r#type: "button",
                        class: "btn btn-outline-danger flex items-center gap-2",
                        onclick: clear,
                        "✕ Clear"
                    }
                }
            }

            if show_filters() {
                div {
                    class: "grid grid-cols-4 gap-4 p-6 bg-white rounded-xl border border-gray-200 shadow-sm",

                    Select {
                        label: "Department".to_string(),
                        value: props.filter.department.clone(),
                        options: with_all(DEPARTMENTS),
                        on_change: edit(|f, v| f.department = v),
                    }
                    Select {
                        label: "Subject".to_string(),
                        value: props.filter.subject.clone(),
                        options: with_all(SUBJECTS),
                        on_change: edit(|f, v| f.subject = v),
                    }
                    Select {
                        label: "Status".to_string(),
                        value: props.filter.status.as_str().to_string(),
                        options: status_options(),
                        on_change: edit(|f, v| f.status = StatusFilter::parse(&v)),
                    }
                    Select {
                        label: "Experience".to_string(),
                        value: props.filter.experience.as_str().to_string(),
                        options: experience_options(),
                        on_change: edit(|f, v| f.experience = ExperienceBand::parse(&v)),
                    }
                }
            }
        }
    }
}

/// Handler that applies one edit to a copy of the current filter
fn edit_handler(
    current: &TeacherFilter,
    on_change: EventHandler<TeacherFilter>,
    apply: fn(&mut TeacherFilter, String),
) -> impl FnMut(String) + 'static {
    let current = current.clone();
    move |value| {
        let mut next = current.clone();
        apply(&mut next, value);
        on_change.call(next);
    }
}

/// "All" followed by the catalog names
fn with_all(names: &[&str]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::plain(ALL))
        .chain(names.iter().map(|name| SelectOption::plain(*name)))
        .collect()
}

fn status_options() -> Vec<SelectOption> {
    StatusFilter::all()
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

fn experience_options() -> Vec<SelectOption> {
    ExperienceBand::all()
        .iter()
        .map(|b| SelectOption::new(b.as_str(), b.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_start_with_all() {
        let options = with_all(DEPARTMENTS);
        assert_eq!(options[0].value, ALL);
        assert_eq!(options.len(), DEPARTMENTS.len() + 1);

        assert_eq!(status_options().len(), StatusFilter::all().len());
        assert_eq!(experience_options()[0].value, ExperienceBand::All.as_str());
    }

    #[test]
    fn test_option_values_parse_back() {
        for option in experience_options() {
            assert_eq!(ExperienceBand::parse(&option.value).as_str(), option.value);
        }
        for option in status_options() {
            assert_eq!(StatusFilter::parse(&option.value).as_str(), option.value);
        }
    }
}
