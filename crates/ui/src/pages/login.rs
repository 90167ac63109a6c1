//! Login Page Component
//!
//! Email and password form for the single administrator account, with a
//! show/hide password toggle and a remember-me checkbox. A rejected attempt
//! shows a static banner until the next edit. The app shell only renders
//! this page while signed out, so a signed-in user lands on the dashboard.

use dioxus::prelude::*;
use tms_auth::LoginCredentials;

use crate::components::inputs::{Checkbox, TextInput};
use crate::hooks::{LOGIN_FAILED_MESSAGE, use_auth};

#[component]
pub fn LoginPage() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);

    let submit = move || {
        let credentials = LoginCredentials::new(email.read().clone(), password.read().clone())
            .remember(*remember_me.read());
        auth.login(credentials);
    };

    let pending = auth.is_pending();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 p-4",

            div {
                class: "w-full max-w-md bg-white rounded-2xl shadow-xl p-8",

                div {
                    class: "text-center mb-8",
                    div {
                        class: "mx-auto w-16 h-16 rounded-full bg-blue-600 text-white flex items-center justify-center text-3xl mb-4",
                        "🎓"
                    }
                    h1 { class: "text-2xl font-bold text-gray-900", "Teacher Management System" }
                    p { class: "text-gray-500 mt-1", "Sign in to your account" }
                }

                if auth.has_failed() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 text-sm rounded-lg",
                        role: "alert",
                        "{LOGIN_FAILED_MESSAGE}"
                    }
                }

                form {
                    class: "space-y-5",
                    onsubmit: move |e| {
                        e.prevent_default();
                        submit();
                    },

                    TextInput {
                        value: email.read().clone(),
                        label: "Email Address",
                        input_type: "email",
                        placeholder: "Enter your email",
                        required: true,
                        disabled: pending,
                        on_change: move |value: String| {
                            email.set(value);
                            auth.clear_error();
                        },
                    }

                    TextInput {
                        value: password.read().clone(),
                        label: "Password",
                        input_type: "password",
                        placeholder: "Enter your password",
                        required: true,
                        disabled: pending,
                        revealable: true,
                        on_change: move |value: String| {
                            password.set(value);
                            auth.clear_error();
                        },
                    }

                    div {
                        class: "flex items-center justify-between",
                        Checkbox {
                            checked: *remember_me.read(),
                            label: "Remember me",
                            disabled: pending,
                            on_change: move |checked: bool| remember_me.set(checked),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: pending,
                        if pending { "Signing in..." } else { "Sign In" }
                    }
                }

                div {
                    class: "mt-6 p-3 bg-gray-50 rounded-lg text-xs text-gray-500 text-center",
                    p { "Demo credentials: {tms_auth::MOCK_EMAIL} / {tms_auth::MOCK_PASSWORD}" }
                }
            }
        }
    }
}
