//! QR backend client.
//!
//! The backend is an opaque collaborator with a single operation: take an
//! image, return the bytes of a generated QR code image.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::file::SelectedFile;

/// Anything that can turn an uploaded image into QR code image bytes
#[async_trait]
pub trait QrGenerator: Send + Sync {
    /// Upload `file` and return the generated image bytes, unmodified
    async fn generate(&self, file: &SelectedFile) -> Result<Bytes, UploadError>;
}

/// Multipart-over-HTTP client for the QR backend.
///
/// One POST per call, no timeout, no retry.
#[derive(Debug, Clone)]
pub struct HttpQrGenerator {
    http: reqwest::Client,
    endpoint: String,
    field_name: String,
}

impl HttpQrGenerator {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form(&self, file: &SelectedFile) -> Result<Form, UploadError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime)?;
        Ok(Form::new().part(self.field_name.clone(), part))
    }
}

#[async_trait]
impl QrGenerator for HttpQrGenerator {
    async fn generate(&self, file: &SelectedFile) -> Result<Bytes, UploadError> {
        let form = self.form(file)?;

        tracing::info!(
            endpoint = %self.endpoint,
            name = %file.name,
            len = file.len(),
            "Uploading image"
        );
        let resp = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, %status, "QR backend rejected upload");
            return Err(UploadError::Status(status));
        }

        let body = resp.bytes().await?;
        tracing::info!(len = body.len(), "Received QR image");
        Ok(body)
    }
}
