//! Settings Page Component
//!
//! Profile, notification and system preferences. Edits stay local to the
//! page until Save; a saved profile must have a name and a valid email.

use dioxus::prelude::*;
use tms_core::{FieldErrors, Validatable};
use tms_model::settings::field;
use tms_model::{NotificationKind, Settings, SystemToggle};

use crate::components::inputs::{TextInput, Toggle};
use crate::state::APP_STATE;

fn profile_field(
    mut draft: Signal<Settings>,
    mut errors: Signal<FieldErrors>,
    key: &'static str,
    apply: fn(&mut Settings, String),
) -> impl FnMut(String) {
    move |value: String| {
        apply(&mut draft.write(), value);
        errors.write().clear_field(key);
    }
}

#[component]
pub fn SettingsPage() -> Element {
    let mut draft = use_signal(|| APP_STATE.read().settings.clone());
    let mut errors = use_signal(FieldErrors::new);

    let handle_save = move |_| {
        let settings = draft.read().clone();
        let field_errors = settings.field_errors();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        let mut state = APP_STATE.write();
        if let Err(e) = state.save_settings(settings) {
            state.report_error("Save settings", &e);
        }
    };

    let handle_reset = move |_| {
        draft.set(APP_STATE.read().settings.clone());
        errors.set(FieldErrors::new());
    };

    let values = draft.read();
    let errs = errors.read();
    let dirty = *values != APP_STATE.read().settings;

    rsx! {
        div {
            class: "p-8 space-y-6 max-w-4xl",

            div {
                class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Settings" }
                    p { class: "text-gray-500 mt-1", "Manage your profile and system preferences" }
                }
                div {
                    class: "flex gap-3",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        disabled: !dirty,
                        onclick: handle_reset,
                        "Reset"
                    }
                    button { r#type: "button", class: "btn", onclick: handle_save, "Save Changes" }
                }
            }

            // Profile
            section {
                class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "👤 Profile" }
                div {
                    class: "grid grid-cols-2 gap-4",
                    TextInput {
                        value: values.profile.name.clone(),
                        label: "Full Name",
                        required: true,
                        error: errs.message(field::NAME),
                        on_change: profile_field(draft, errors, field::NAME, |s, v| s.profile.name = v),
                    }
                    TextInput {
                        value: values.profile.email.clone(),
                        label: "Email",
                        input_type: "email",
                        required: true,
                        error: errs.message(field::EMAIL),
                        on_change: profile_field(draft, errors, field::EMAIL, |s, v| s.profile.email = v),
                    }
                    TextInput {
                        value: values.profile.phone.clone(),
                        label: "Phone",
                        input_type: "tel",
                        on_change: profile_field(draft, errors, "phone", |s, v| s.profile.phone = v),
                    }
                    TextInput {
                        value: values.profile.role.clone(),
                        label: "Role",
                        readonly: true,
                        help_text: "Contact an administrator to change your role",
                    }
                }
            }

            // Notifications
            section {
                class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "🔔 Notifications" }
                div {
                    class: "space-y-4",
                    for kind in NotificationKind::all().iter().copied() {
                        Toggle {
                            key: "{kind.label()}",
                            checked: values.notifications.get(kind),
                            label: kind.label(),
                            help_text: kind.description(),
                            on_change: move |enabled: bool| draft.write().notifications.set(kind, enabled),
                        }
                    }
                }
            }

            // System
            section {
                class: "bg-white rounded-xl border border-gray-200 shadow-sm p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "⚙️ System" }
                div {
                    class: "space-y-4",
                    for toggle in SystemToggle::all().iter().copied() {
                        Toggle {
                            key: "{toggle.label()}",
                            checked: values.system.get(toggle),
                            label: toggle.label(),
                            help_text: toggle.description(),
                            on_change: move |enabled: bool| draft.write().system.set(toggle, enabled),
                        }
                    }
                }
            }
        }
    }
}
