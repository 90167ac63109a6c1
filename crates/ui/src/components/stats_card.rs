//! # Stats Card Component
//!
//! A headline number with a title, an icon and an optional caption, used on
//! the dashboard and above the leave, attendance and performance tables.

use dioxus::prelude::*;

/// Accent colour of the icon badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatColor {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    Orange,
}

impl StatColor {
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatColor::Blue => "bg-blue-100 text-blue-600",
            StatColor::Green => "bg-green-100 text-green-600",
            StatColor::Yellow => "bg-yellow-100 text-yellow-600",
            StatColor::Red => "bg-red-100 text-red-600",
            StatColor::Purple => "bg-purple-100 text-purple-600",
            StatColor::Orange => "bg-orange-100 text-orange-600",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatsCardProps {
    pub title: &'static str,

    /// Already formatted value
    pub value: String,

    pub icon: &'static str,

    #[props(default)]
    pub color: StatColor,

    /// Small caption under the value
    #[props(default)]
    pub subtitle: Option<String>,
}

#[component]
pub fn StatsCard(props: StatsCardProps) -> Element {
    let badge = props.color.badge_class();

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 shadow-sm p-5 flex items-center justify-between",

            div {
                class: "min-w-0",
                p { class: "text-sm font-medium text-gray-500", "{props.title}" }
                p { class: "mt-1 text-2xl font-bold text-gray-900", "{props.value}" }
                if let Some(subtitle) = &props.subtitle {
                    p { class: "mt-1 text-xs text-gray-500", "{subtitle}" }
                }
            }

            div {
                class: "w-12 h-12 rounded-lg flex items-center justify-center text-xl {badge}",
                "{props.icon}"
            }
        }
    }
}
