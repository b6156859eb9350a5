//! File intake - local files picked or dropped by the user.
//!
//! The drop surface and the native picker both produce [`SelectedFile`]s,
//! which pass through an [`ImageFilter`] before they reach the widget.
//! Only the declared type is checked; the bytes are never inspected.

use std::path::Path;

use bytes::Bytes;

use crate::config::ACCEPT_IMAGES;
use crate::error::IntakeError;

/// Extensions offered by the native file picker
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "ico", "tif", "tiff", "avif",
];

/// A file chosen by the user, held entirely in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Display name (final path component)
    pub name: String,
    /// Declared MIME type
    pub mime: String,
    /// File contents
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, IntakeError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_dropped(path.to_string_lossy(), bytes))
    }

    /// Build a file from a drop event, where the webview hands over a name
    /// (usually a full path on desktop) and the already-read contents.
    pub fn from_dropped(name_or_path: impl AsRef<str>, bytes: impl Into<Bytes>) -> Self {
        let raw = name_or_path.as_ref();
        let path = Path::new(raw);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw.to_string());
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self::new(name, mime, bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Type filter for the drop surface and picker, single selection only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFilter {
    accept: String,
}

impl ImageFilter {
    /// Filter for an `accept` pattern such as `image/*` or `image/png`
    pub fn new(accept: impl Into<String>) -> Self {
        Self {
            accept: accept.into(),
        }
    }

    /// Whether the file's declared type matches the pattern
    pub fn accepts(&self, file: &SelectedFile) -> bool {
        let mime = file.mime.to_ascii_lowercase();
        let accept = self.accept.to_ascii_lowercase();

        match accept.strip_suffix("/*") {
            Some(top_level) => mime
                .split_once('/')
                .is_some_and(|(kind, _)| kind == top_level),
            None => mime == accept,
        }
    }

    /// Keep accepted files, at most one.
    ///
    /// A drop containing only rejected files yields an empty list, which the
    /// widget treats as "no selection".
    pub fn accept(&self, candidates: impl IntoIterator<Item = SelectedFile>) -> Vec<SelectedFile> {
        let mut accepted = Vec::with_capacity(1);
        for file in candidates {
            if self.accepts(&file) {
                accepted.push(file);
                break;
            }
            tracing::debug!(name = %file.name, mime = %file.mime, "Rejected non-image file");
        }
        accepted
    }

    /// Like [`accepts`](Self::accepts), as an error for callers that report rejections
    pub fn check(&self, file: &SelectedFile) -> Result<(), IntakeError> {
        if self.accepts(file) {
            Ok(())
        } else {
            Err(IntakeError::NotAnImage {
                name: file.name.clone(),
                mime: file.mime.clone(),
            })
        }
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new(ACCEPT_IMAGES)
    }
}
