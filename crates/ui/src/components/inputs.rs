//! # Input Components
//!
//! Reusable form input components for the TMS UI.
//!
//! This module provides styled input components including:
//! - **TextInput**: Single-line text input (text, email, password, date, time)
//! - **NumberInput**: Numeric input with optional min and unit
//! - **Select**: Dropdown selection
//! - **Checkbox**: Boolean checkbox
//! - **Toggle**: Switch-style toggle
//!
//! All components share the same Tailwind-style classes and show an inline
//! error message under the control when `error` is set.
//!

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default = false)]
    pub readonly: bool,

    /// Input type (text, email, password, date, time)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Icon shown inside the left edge
    #[props(default)]
    pub prefix: Option<String>,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,

    /// Show a show/hide button for password inputs
    #[props(default = false)]
    pub revealable: bool,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let mut revealed = use_signal(|| false);
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled, &props.class);
    let input_type = effective_input_type(&props.input_type, props.revealable && revealed());

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "{label}"
                    if props.required {
                        span { class: "text-red-500 ml-0.5", "*" }
                    }
                }
            }

            div {
                class: "relative flex items-center",

                if let Some(prefix) = &props.prefix {
                    span {
                        class: "absolute left-3 text-gray-400 text-sm pointer-events-none",
                        "{prefix}"
                    }
                }

                input {
                    class: "{input_class}",
                    class: if props.prefix.is_some() { "pl-9" } else { "" },
                    class: if props.revealable { "pr-10" } else { "" },
                    r#type: "{input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    readonly: props.readonly,
                    oninput: move |e| props.on_change.call(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            props.on_enter.call(props.value.clone());
                        }
                    },
                }

                if props.revealable {
                    button {
                        r#type: "button",
                        class: "absolute right-3 text-gray-400 hover:text-gray-600 text-sm",
                        title: if revealed() { "Hide password" } else { "Show password" },
                        onclick: move |_| revealed.toggle(),
                        if revealed() { "🙈" } else { "👁" }
                    }
                }
            }

            FieldMessage { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Number Input Component
// ============================================================================

/// Properties for NumberInput component
#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    /// Input value
    pub value: f64,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    /// Minimum value
    #[props(default)]
    pub min: Option<f64>,

    /// Step value
    #[props(default = 1.0)]
    pub step: f64,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Unit suffix (e.g., "years", "$")
    #[props(default)]
    pub unit: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<f64>,
}

/// Numeric input component
///
/// Text that does not parse as a number is ignored rather than reported,
/// so the last valid value stays in the form.
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled, &None);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "{label}"
                    if props.required {
                        span { class: "text-red-500 ml-0.5", "*" }
                    }
                }
            }

            div {
                class: "relative flex items-center",

                input {
                    class: "{input_class}",
                    class: if props.unit.is_some() { "pr-16" } else { "" },
                    r#type: "number",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    min: props.min.map(|v| v.to_string()),
                    step: "{props.step}",
                    oninput: move |e| {
                        if let Some(v) = parse_number(&e.value()) {
                            props.on_change.call(clamp_min(v, props.min));
                        }
                    },
                }

                if let Some(unit) = &props.unit {
                    span {
                        class: "absolute right-3 text-gray-400 text-sm pointer-events-none",
                        "{unit}"
                    }
                }
            }

            FieldMessage { error: props.error.clone() }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,

    /// Display label
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Options for a fixed list of names
    pub fn from_names(names: &[&str]) -> Vec<Self> {
        names.iter().map(|name| Self::plain(*name)).collect()
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_select_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "{label}"
                    if props.required {
                        span { class: "text-red-500 ml-0.5", "*" }
                    }
                }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            FieldMessage { error: props.error.clone() }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    #[props(default)]
    pub label: Option<String>,

    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let checkbox_class = build_checkbox_class(props.checked, props.disabled);

    rsx! {
        label {
            class: "inline-flex items-center gap-2 cursor-pointer select-none",
            class: if props.disabled { "opacity-50 cursor-not-allowed" } else { "" },

            input {
                class: "sr-only",
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| {
                    if !props.disabled {
                        props.on_change.call(!props.checked);
                    }
                },
            }

            div {
                class: "{checkbox_class}",
                if props.checked {
                    svg {
                        class: "w-3 h-3 text-white",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "3",
                        view_box: "0 0 24 24",
                        path { d: "M5 13l4 4L19 7" }
                    }
                }
            }

            if let Some(label) = &props.label {
                span { class: "text-sm text-gray-700", "{label}" }
            }
        }
    }
}

// ============================================================================
// Toggle Component
// ============================================================================

/// Properties for Toggle component
#[derive(Props, Clone, PartialEq)]
pub struct ToggleProps {
    /// Whether on
    pub checked: bool,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub help_text: Option<String>,

    #[props(default = false)]
    pub disabled: bool,

    /// Size variant
    #[props(default = ToggleSize::Medium)]
    pub size: ToggleSize,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Toggle size variants
#[derive(Clone, Copy, PartialEq, Default)]
pub enum ToggleSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ToggleSize {
    fn track_class(&self) -> &'static str {
        match self {
            ToggleSize::Small => "w-8 h-4",
            ToggleSize::Medium => "w-10 h-5",
            ToggleSize::Large => "w-12 h-6",
        }
    }

    fn thumb_class(&self) -> &'static str {
        match self {
            ToggleSize::Small => "w-3 h-3",
            ToggleSize::Medium => "w-4 h-4",
            ToggleSize::Large => "w-5 h-5",
        }
    }

    fn translate_class(&self) -> &'static str {
        match self {
            ToggleSize::Small => "translate-x-4",
            ToggleSize::Medium => "translate-x-5",
            ToggleSize::Large => "translate-x-6",
        }
    }
}

/// Switch with its label and description on the left
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let track = props.size.track_class();
    let thumb = props.size.thumb_class();
    let translate = if props.checked {
        props.size.translate_class()
    } else {
        "translate-x-0"
    };

    let handle_click = move |_| {
        if !props.disabled {
            props.on_change.call(!props.checked);
        }
    };

    rsx! {
        div {
            class: "flex items-center justify-between gap-4 py-3",

            if props.label.is_some() || props.help_text.is_some() {
                div {
                    class: "flex flex-col min-w-0 flex-1",
                    if let Some(label) = &props.label {
                        span { class: "text-sm font-medium text-gray-900", "{label}" }
                    }
                    if let Some(help) = &props.help_text {
                        span { class: "text-sm text-gray-500", "{help}" }
                    }
                }
            }

            button {
                r#type: "button",
                role: "switch",
                class: "relative inline-flex flex-shrink-0 items-center rounded-full transition-colors {track}",
                class: if props.checked { "bg-blue-600" } else { "bg-gray-200" },
                class: if props.disabled { "opacity-50 cursor-not-allowed" } else { "cursor-pointer" },
                disabled: props.disabled,
                onclick: handle_click,

                span {
                    class: "inline-block rounded-full bg-white shadow transition-transform ml-0.5 {thumb} {translate}",
                }
            }
        }
    }
}

// ============================================================================
// Field Message
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct FieldMessageProps {
    #[props(default)]
    error: Option<String>,

    #[props(default)]
    help_text: Option<String>,
}

/// Error or help line under a control
#[component]
fn FieldMessage(props: FieldMessageProps) -> Element {
    rsx! {
        if let Some(error) = &props.error {
            p { class: "mt-1 text-sm text-red-600", "{error}" }
        } else if let Some(help) = &props.help_text {
            p { class: "mt-1 text-xs text-gray-500", "{help}" }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool, extra: &Option<String>) -> String {
    let mut classes = vec![
        "w-full",
        "px-3",
        "py-2",
        "bg-white",
        "border",
        "rounded-lg",
        "text-sm",
        "text-gray-900",
        "placeholder-gray-400",
        "transition-colors",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if has_error {
        classes.push("border-red-500");
        classes.push("focus:ring-red-500/30");
    } else {
        classes.push("border-gray-300");
        classes.push("focus:ring-blue-500/30");
        classes.push("focus:border-blue-500");
    }

    if disabled {
        classes.push("bg-gray-50");
        classes.push("cursor-not-allowed");
    }

    let mut result = classes.join(" ");
    if let Some(extra) = extra {
        result.push(' ');
        result.push_str(extra);
    }

    result
}

/// Build select class string
fn build_select_class(has_error: bool, disabled: bool) -> String {
    let mut class = build_input_class(has_error, disabled, &None);
    class.push_str(" cursor-pointer");
    class
}

/// Build checkbox class string
fn build_checkbox_class(checked: bool, disabled: bool) -> String {
    let mut classes = vec![
        "w-4",
        "h-4",
        "rounded",
        "border",
        "transition-colors",
        "flex",
        "items-center",
        "justify-center",
    ];

    if checked {
        classes.push("bg-blue-600");
        classes.push("border-blue-600");
    } else if disabled {
        classes.push("bg-gray-100");
        classes.push("border-gray-300");
    } else {
        classes.push("bg-white");
        classes.push("border-gray-300");
        classes.push("hover:border-gray-400");
    }

    classes.join(" ")
}

/// Password inputs turn into text inputs while revealed
fn effective_input_type(input_type: &str, revealed: bool) -> &str {
    if revealed && input_type == "password" {
        "text"
    } else {
        input_type
    }
}

/// Parse what the user typed in a number input; empty counts as zero
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Raise a value to the optional minimum
fn clamp_min(value: f64, min: Option<f64>) -> f64 {
    match min {
        Some(min) => value.max(min),
        None => value,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false, &None);
        assert!(class.contains("border-gray-300"));
        assert!(!class.contains("border-red-500"));
        assert!(!class.contains("cursor-not-allowed"));
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false, &None);
        assert!(class.contains("border-red-500"));
    }

    #[test]
    fn test_build_input_class_extra() {
        let class = build_input_class(false, true, &Some("pr-10".to_string()));
        assert!(class.ends_with(" pr-10"));
        assert!(class.contains("cursor-not-allowed"));
    }

    #[test]
    fn test_checkbox_class_follows_checked() {
        assert!(build_checkbox_class(true, false).contains("bg-blue-600"));
        assert!(build_checkbox_class(false, false).contains("bg-white"));
    }

    #[test]
    fn test_select_option_from_names() {
        let options = SelectOption::from_names(&["Science", "Arts"]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "Science");
        assert_eq!(options[0].label, "Science");
    }

    #[test]
    fn test_revealed_password_is_text() {
        assert_eq!(effective_input_type("password", true), "text");
        assert_eq!(effective_input_type("password", false), "password");
        assert_eq!(effective_input_type("email", true), "email");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_clamp_min() {
        assert_eq!(clamp_min(5.0, Some(0.0)), 5.0);
        assert_eq!(clamp_min(-5.0, Some(0.0)), 0.0);
        assert_eq!(clamp_min(-5.0, None), -5.0);
    }

    #[test]
    fn test_toggle_size_classes() {
        assert!(ToggleSize::Small.track_class().contains("w-8"));
        assert!(ToggleSize::Medium.thumb_class().contains("w-4"));
        assert!(ToggleSize::Large.translate_class().contains("translate-x-6"));
    }
}
