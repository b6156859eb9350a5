//! Button Components
//!
//! Button styles used by the upload card:
//! - Primary: the main "Generate QR code" action
//! - Secondary: opening the file picker
//! - Outline: downloading the result

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action - solid green, full emphasis
    #[default]
    Primary,
    /// Solid blue, used inside the drop zone
    Secondary,
    /// Transparent with a blue border
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, spinner, ...)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Build the class list for a button
pub fn button_class(variant: ButtonVariant, full_width: bool, extra: Option<&str>) -> String {
    let mut classes = vec![variant.class()];
    if full_width {
        classes.push("btn-block");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         full_width: true,
///         disabled: !ready,
///         onclick: move |_| start_upload(),
///         "Generate QR code"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.full_width, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
