//! qrdrop UI Components
//!
//! Small Dioxus building blocks shared by the desktop app: a styled
//! [`Button`] with variants and an inline [`Spinner`].

pub mod components;

pub use components::*;
