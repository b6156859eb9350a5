//! Error types for qrdrop

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single upload to the QR backend.
///
/// Every variant is surfaced to the user through a [`Notice`](crate::Notice);
/// nothing propagates past the upload operation.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The backend answered with a non-2xx status.
    ///
    /// The message is deliberately uniform; the status is kept for logging.
    #[error("Upload failed")]
    Status(StatusCode),

    /// Connecting, sending or reading the response body failed
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl UploadError {
    /// HTTP status of a rejected upload, if the backend answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UploadError::Status(status) => Some(*status),
            UploadError::Transport(err) => err.status(),
        }
    }
}

/// Errors while turning a local file into a [`SelectedFile`](crate::SelectedFile)
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Reading the picked file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's declared type is not an image
    #[error("{name} is not an image file ({mime})")]
    NotAnImage { name: String, mime: String },
}

/// Invalid configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The endpoint could not be parsed as an absolute URL
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
