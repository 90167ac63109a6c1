//! Initials avatar

use dioxus::prelude::*;
use tms_core::format::initials;

/// Background colours cycled through by name
const AVATAR_COLORS: &[&str] = &[
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-orange-500",
    "bg-pink-500",
    "bg-indigo-500",
    "bg-teal-500",
    "bg-red-500",
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "w-8 h-8 text-xs",
            AvatarSize::Medium => "w-12 h-12 text-sm",
            AvatarSize::Large => "w-20 h-20 text-2xl",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    pub name: String,

    #[props(default)]
    pub size: AvatarSize,
}

/// Coloured circle with the name's initials
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let letters = initials(&props.name);
    let color = avatar_color(&props.name);
    let size = props.size.class();

    rsx! {
        div {
            class: "flex-shrink-0 rounded-full flex items-center justify-center font-semibold text-white {color} {size}",
            title: "{props.name}",
            "{letters}"
        }
    }
}

/// Same name, same colour
pub fn avatar_color(name: &str) -> &'static str {
    let sum: usize = name.bytes().map(usize::from).sum();
    AVATAR_COLORS[sum % AVATAR_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_color_is_stable() {
        assert_eq!(avatar_color("Sarah Johnson"), avatar_color("Sarah Johnson"));
        assert!(AVATAR_COLORS.contains(&avatar_color("")));
    }
}
