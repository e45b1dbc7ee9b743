//! Shared button component

use dioxus::prelude::*;

/// Visual style of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
    /// Square icon button in the button bar
    Icon,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "button button-primary",
            Self::Secondary => "button button-secondary",
            Self::Icon => "button button-icon",
        }
    }
}

/// Button with the app's styling
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(into, default)] title: String,
    #[props(default)] active: bool,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = if active {
        format!("{} active", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        button {
            class: "{class}",
            title: "{title}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
