//! Loading spinner shown in place of a button label.

use dioxus::prelude::*;

/// Properties for the Spinner component
#[derive(Clone, PartialEq, Props)]
pub struct SpinnerProps {
    /// Diameter in pixels (default: 24)
    #[props(default = 24)]
    pub size: u32,
}

/// Circular progress indicator, inherits the surrounding text colour.
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    let size = props.size;
    let border = (size / 8).max(2);

    rsx! {
        span {
            class: "loading-spinner",
            role: "progressbar",
            "aria-label": "Loading",
            style: "width: {size}px; height: {size}px; border-width: {border}px;",
        }
    }
}
