//! Upload widget state machine.
//!
//! [`UploadWidget`] owns the whole selection → upload → preview lifecycle:
//!
//! ```text
//! Idle ──select──▶ FileSelected ──upload──▶ Uploading ──▶ Succeeded
//!  ▲                   ▲                        │            │
//!  └──empty drop───────┴──────select────────────┴──▶ Failed ◀┘
//! ```
//!
//! The upload is split into [`begin_upload`](UploadWidget::begin_upload) and
//! [`complete_upload`](UploadWidget::complete_upload) so an event-driven UI
//! never holds the widget across the network await; headless callers can use
//! [`handle_upload`](UploadWidget::handle_upload) instead.

use std::path::Path;

use bytes::Bytes;

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::file::{ImageFilter, SelectedFile};
use crate::generator::QrGenerator;
use crate::preview::{PreviewHandle, PreviewStore};

/// Drop surface text while a drag hovers over it
pub const PROMPT_DRAG_ACTIVE: &str = "Drop the file here!";
/// Drop surface text otherwise
pub const PROMPT_IDLE: &str = "Drag an image here or choose one with the button below.";
/// Hint shown while nothing is selected
pub const HINT_NO_FILE: &str = "Only image files can be uploaded.";
/// Upload button label when not loading
pub const UPLOAD_LABEL: &str = "Generate QR code";

/// Where the widget is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    Uploading,
    Succeeded,
    Failed,
}

/// User-facing failure message for a blocking alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl From<&UploadError> for Notice {
    fn from(err: &UploadError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Result of one upload attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Nothing to upload, or an upload was already in flight; no request made
    Skipped,
    /// A new preview is available
    Succeeded,
    /// The request failed; show the notice
    Failed(Notice),
}

/// An upload in flight. Holds its own copy of the file, so later selections
/// do not change what is being uploaded.
#[derive(Debug)]
#[must_use = "an upload ticket must be passed back to complete_upload"]
pub struct UploadTicket {
    file: SelectedFile,
}

impl UploadTicket {
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

/// Everything the download control needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub bytes: Bytes,
}

impl DownloadArtifact {
    /// Write the bytes, unmodified, to `path`
    pub async fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, &self.bytes).await?;
        tracing::info!(path = %path.display(), len = self.bytes.len(), "Saved QR code");
        Ok(())
    }
}

/// Render model of the result area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    /// `img` source
    pub src: String,
    /// Locator of the preview resource
    pub locator: String,
    /// Square edge length in pixels
    pub size: u32,
    /// Suggested download filename
    pub download_name: String,
}

/// Render model of the whole widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub prompt: &'static str,
    pub file_label: String,
    pub upload_enabled: bool,
    pub show_spinner: bool,
    pub preview: Option<PreviewView>,
}

/// Selection, upload and preview state of one widget instance
#[derive(Debug)]
pub struct UploadWidget {
    selected: Option<SelectedFile>,
    result: Option<PreviewHandle>,
    loading: bool,
    phase: Phase,
    filter: ImageFilter,
    store: PreviewStore,
    download_name: String,
    preview_size: u32,
}

impl UploadWidget {
    pub fn new(config: &UploadConfig, store: PreviewStore) -> Self {
        Self {
            selected: None,
            result: None,
            loading: false,
            phase: Phase::Idle,
            filter: ImageFilter::new(config.accept.clone()),
            store,
            download_name: config.download_name.clone(),
            preview_size: config.preview_size,
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&PreviewHandle> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &PreviewStore {
        &self.store
    }

    pub fn filter(&self) -> &ImageFilter {
        &self.filter
    }

    /// Run raw candidates through the type filter, then select.
    pub fn intake(&mut self, candidates: impl IntoIterator<Item = SelectedFile>) {
        let accepted = self.filter.accept(candidates);
        self.handle_files_dropped(accepted);
    }

    /// Select the first of `files` (or nothing) and clear any previous result.
    pub fn handle_files_dropped(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        self.selected = files.into_iter().next();

        if let Some(previous) = self.result.take() {
            tracing::debug!(?previous, "Clearing preview for new selection");
        }

        if !self.loading {
            self.phase = if self.selected.is_some() {
                Phase::FileSelected
            } else {
                Phase::Idle
            };
        }

        match &self.selected {
            Some(file) => tracing::debug!(name = %file.name, len = file.len(), "File selected"),
            None => tracing::debug!("Selection cleared"),
        }
    }

    /// Start an upload of the current selection.
    ///
    /// Returns `None`, changing nothing, when no file is selected or an upload
    /// is already in flight.
    pub fn begin_upload(&mut self) -> Option<UploadTicket> {
        if self.loading {
            return None;
        }
        let file = self.selected.clone()?;

        self.loading = true;
        self.phase = Phase::Uploading;
        Some(UploadTicket { file })
    }

    /// Apply the outcome of the request started by `ticket`.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<Bytes, UploadError>,
    ) -> UploadOutcome {
        self.loading = false;

        match outcome {
            Ok(bytes) => {
                tracing::info!(name = %ticket.file.name, len = bytes.len(), "QR code generated");
                // Replacing the handle releases the previous preview.
                self.result = Some(self.store.create(bytes));
                self.phase = Phase::Succeeded;
                UploadOutcome::Succeeded
            }
            Err(err) => {
                tracing::warn!(name = %ticket.file.name, status = ?err.status(), "Upload failed: {}", err);
                self.phase = Phase::Failed;
                UploadOutcome::Failed(Notice::from(&err))
            }
        }
    }

    /// Upload the current selection through `generator` and apply the result.
    pub async fn handle_upload<G>(&mut self, generator: &G) -> UploadOutcome
    where
        G: QrGenerator + ?Sized,
    {
        let Some(ticket) = self.begin_upload() else {
            return UploadOutcome::Skipped;
        };

        let outcome = generator.generate(ticket.file()).await;
        self.complete_upload(ticket, outcome)
    }

    /// Exact response bytes and the suggested filename, if a result exists
    pub fn download_artifact(&self) -> Option<DownloadArtifact> {
        self.result.as_ref().map(|handle| DownloadArtifact {
            file_name: self.download_name.clone(),
            bytes: handle.bytes(),
        })
    }

    /// Render model for the current state
    pub fn view(&self, drag_active: bool) -> WidgetView {
        let prompt = if drag_active {
            PROMPT_DRAG_ACTIVE
        } else {
            PROMPT_IDLE
        };

        let file_label = match &self.selected {
            Some(file) => format!("Selected file: {}", file.name),
            None => HINT_NO_FILE.to_string(),
        };

        let preview = self.result.as_ref().map(|handle| PreviewView {
            src: handle.data_uri(),
            locator: handle.locator(),
            size: self.preview_size,
            download_name: self.download_name.clone(),
        });

        WidgetView {
            prompt,
            file_label,
            upload_enabled: self.selected.is_some() && !self.loading,
            show_spinner: self.loading,
            preview,
        }
    }
}
