//! qrdrop Core Library
//!
//! Image intake, QR backend upload and preview state for the qrdrop
//! desktop app and CLI.
//!
//! ## Overview
//!
//! The user picks or drops one image, uploads it to a QR backend as a
//! multipart form, and gets back the bytes of a generated QR code image,
//! which are shown as a preview and offered for download as `qr.png`.
//! The backend is opaque; this crate only knows its endpoint.
//!
//! ## Quick Start
//!
//! ```ignore
//! use qrdrop_core::{HttpQrGenerator, PreviewStore, SelectedFile, UploadConfig, UploadOutcome, UploadWidget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UploadConfig::default();
//!     let generator = HttpQrGenerator::new(&config);
//!     let mut widget = UploadWidget::new(&config, PreviewStore::new());
//!
//!     widget.intake([SelectedFile::from_path("photo.png").await?]);
//!
//!     match widget.handle_upload(&generator).await {
//!         UploadOutcome::Succeeded => {
//!             let artifact = widget.download_artifact().unwrap();
//!             std::fs::write(&artifact.file_name, &artifact.bytes)?;
//!         }
//!         UploadOutcome::Failed(notice) => eprintln!("{}", notice.message),
//!         UploadOutcome::Skipped => {}
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod drop_zone;
pub mod error;
pub mod file;
pub mod generator;
pub mod logging;
pub mod preview;
pub mod widget;

// Re-exports
pub use config::UploadConfig;
pub use drop_zone::DragDepth;
pub use error::{ConfigError, IntakeError, UploadError};
pub use file::{ImageFilter, SelectedFile, IMAGE_EXTENSIONS};
pub use generator::{HttpQrGenerator, QrGenerator};
pub use preview::{PreviewHandle, PreviewStore};
pub use widget::{
    DownloadArtifact, Notice, Phase, PreviewView, UploadOutcome, UploadTicket, UploadWidget,
    WidgetView,
};
