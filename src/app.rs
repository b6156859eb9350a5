use std::sync::Arc;

use dioxus::prelude::*;
use qrdrop_core::{HttpQrGenerator, UploadConfig};

use crate::components::UploadCard;
use crate::context::{get_upload_config, SharedGenerator};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the upload configuration and the QR generator.
#[component]
pub fn App() -> Element {
    let config: Signal<UploadConfig> = use_signal(get_upload_config);
    let generator: Signal<SharedGenerator> =
        use_signal(|| Arc::new(HttpQrGenerator::new(&config.peek())) as SharedGenerator);

    // Provide configuration and generator to all child components
    use_context_provider(|| config);
    use_context_provider(|| generator);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "app-shell",
            UploadCard {}
        }
    }
}
