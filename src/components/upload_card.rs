//! Upload Card Component
//!
//! Drop zone, file picker, upload button and QR code preview with download.
//! All state transitions go through [`UploadWidget`]; this component only
//! wires DOM events, native dialogs and the network task to it.

use dioxus::desktop::{use_window, DesktopContext};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use qrdrop_core::widget::UPLOAD_LABEL;
use qrdrop_core::{
    DragDepth, ImageFilter, Notice, PreviewStore, SelectedFile, UploadOutcome, UploadWidget, IMAGE_EXTENSIONS,
};
use qrdrop_ui::{Button, ButtonVariant, Spinner};
use rfd::{AsyncMessageDialog, FileDialog, MessageButtons, MessageLevel};

use crate::context::{use_generator, use_upload_config};

/// Dialog title for alerts
const ALERT_TITLE: &str = "QR Code Generator";

/// Error alert, modal to `parent` like a browser `alert()`
async fn show_alert(parent: &DesktopContext, notice: &Notice) {
    AsyncMessageDialog::new()
        .set_parent(&*parent.window)
        .set_level(MessageLevel::Error)
        .set_title(ALERT_TITLE)
        .set_description(notice.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// Read the first dropped file the filter would accept.
///
/// Names come from the webview (full paths on desktop); only the chosen file
/// is read.
async fn read_first_accepted(
    engine: &dyn FileEngine,
    filter: &ImageFilter,
) -> Option<SelectedFile> {
    for name in engine.files() {
        let probe = SelectedFile::from_dropped(&name, Vec::new());
        if !filter.accepts(&probe) {
            tracing::debug!(name = %name, mime = %probe.mime, "Ignoring dropped non-image");
            continue;
        }

        match engine.read_file(&name).await {
            Some(bytes) => return Some(SelectedFile::from_dropped(&name, bytes)),
            None => tracing::warn!("Could not read dropped file {}", name),
        }
    }
    None
}

/// The whole selection → upload → preview card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     main { class: "app-shell",
///         UploadCard {}
///     }
/// }
/// ```
#[component]
pub fn UploadCard() -> Element {
    let config = use_upload_config();
    let generator = use_generator();
    let mut widget = use_signal(|| UploadWidget::new(&config.peek(), PreviewStore::new()));
    let mut drag = use_signal(DragDepth::new);
    let window = use_window();

    let pick_window = window.clone();
    let pick_file = move |_: ()| {
        let window = pick_window.clone();
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match SelectedFile::from_path(&path).await {
                    Ok(file) => widget.write().intake([file]),
                    Err(e) => {
                        tracing::warn!("Failed to read {}: {}", path.display(), e);
                        show_alert(
                            &window,
                            &Notice {
                                message: e.to_string(),
                            },
                        )
                        .await;
                    }
                },
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => tracing::error!("File picker error: {:?}", e),
            }
        });
    };

    let upload_window = window.clone();
    let upload = move |_: ()| {
        let Some(ticket) = widget.write().begin_upload() else {
            return;
        };
        let generator = generator.read().clone();
        let window = upload_window.clone();

        spawn(async move {
            let outcome = generator.generate(ticket.file()).await;
            let result = widget.write().complete_upload(ticket, outcome);
            if let UploadOutcome::Failed(notice) = result {
                show_alert(&window, &notice).await;
            }
        });
    };

    let download = move |_: ()| {
        let Some(artifact) = widget.read().download_artifact() else {
            return;
        };
        let window = window.clone();

        spawn(async move {
            let file_name = artifact.file_name.clone();
            let target = tokio::task::spawn_blocking(move || {
                let mut dialog = FileDialog::new()
                    .set_title("Save QR code")
                    .set_file_name(file_name);
                if let Some(dir) = dirs::download_dir() {
                    dialog = dialog.set_directory(dir);
                }
                dialog.save_file()
            })
            .await;

            match target {
                Ok(Some(path)) => {
                    if let Err(e) = artifact.save_to(&path).await {
                        tracing::error!("Failed to save {}: {}", path.display(), e);
                        show_alert(
                            &window,
                            &Notice {
                                message: format!("Could not save {}: {}", path.display(), e),
                            },
                        )
                        .await;
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::error!("Save dialog error: {:?}", e),
            }
        });
    };

    let drag_active = drag.read().is_active();
    let view = widget.read().view(drag_active);

    rsx! {
        div { class: "upload-card",
            h1 { class: "upload-card__title", "QR Code Generator" }

            div {
                class: if drag_active { "drop-zone drop-zone--active" } else { "drop-zone" },
                ondragenter: move |evt| {
                    evt.prevent_default();
                    drag.write().enter();
                },
                ondragover: move |evt| evt.prevent_default(),
                ondragleave: move |_| drag.write().leave(),
                ondrop: move |evt: DragEvent| async move {
                    evt.prevent_default();
                    drag.write().reset();

                    let filter = widget.read().filter().clone();
                    let dropped = match evt.files() {
                        Some(engine) => read_first_accepted(engine.as_ref(), &filter).await,
                        None => None,
                    };
                    widget.write().intake(dropped);
                },

                p { class: "drop-zone__prompt", "{view.prompt}" }
                p { class: "drop-zone__hint", "{view.file_label}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: pick_file,
                    "Choose file"
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                full_width: true,
                class: "upload-btn".to_string(),
                disabled: !view.upload_enabled,
                onclick: upload,
                if view.show_spinner {
                    Spinner { size: 24 }
                } else {
                    "{UPLOAD_LABEL}"
                }
            }

            if let Some(preview) = view.preview {
                div { class: "result",
                    h2 { class: "result__title", "QR code preview" }
                    img {
                        class: "result__image",
                        src: "{preview.src}",
                        alt: "QR code",
                        "data-locator": "{preview.locator}",
                        style: "width: {preview.size}px; height: {preview.size}px;",
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "result__download".to_string(),
                        onclick: download,
                        "Download {preview.download_name}"
                    }
                }
            }
        }
    }
}
