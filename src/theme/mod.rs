//! Visual theme for the qrdrop window.

mod styles;

pub use styles::GLOBAL_STYLES;
