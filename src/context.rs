//! Context providers for the qrdrop window.
//!
//! The upload configuration and the QR generator are provided once by
//! `App` and read by components via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_upload_config();
//! let generator = use_generator();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use qrdrop_core::{QrGenerator, UploadConfig};

/// Shared generator type for context.
///
/// Behind a trait object so tests and alternative backends can stand in
/// for the HTTP client.
pub type SharedGenerator = Arc<dyn QrGenerator>;

/// Get the upload configuration set from the command line.
pub fn get_upload_config() -> UploadConfig {
    crate::get_upload_config()
}

/// Hook to access the upload configuration from context.
pub fn use_upload_config() -> Signal<UploadConfig> {
    use_context::<Signal<UploadConfig>>()
}

/// Hook to access the QR generator from context.
pub fn use_generator() -> Signal<SharedGenerator> {
    use_context::<Signal<SharedGenerator>>()
}
