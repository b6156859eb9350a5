//! Reusable UI components for the qrdrop window.
//!
//! Styling lives in the app's global stylesheet; components only emit
//! class names.

mod button;
mod spinner;

pub use button::*;
pub use spinner::*;
