//! Upload configuration.
//!
//! The defaults are fixed literals; the binaries only override the endpoint
//! from their command line.

use url::Url;

use crate::error::ConfigError;

/// Backend endpoint used when none is given
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload/";

/// Multipart field holding the uploaded image
pub const DEFAULT_FIELD_NAME: &str = "file";

/// Filename suggested by the download control
pub const DEFAULT_DOWNLOAD_NAME: &str = "qr.png";

/// Edge length of the square preview, in CSS pixels
pub const DEFAULT_PREVIEW_SIZE: u32 = 256;

/// MIME pattern accepted by the drop surface and the picker
pub const ACCEPT_IMAGES: &str = "image/*";

/// Everything the widget and the HTTP generator need to know about the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// POST target for uploads, always an absolute URL
    pub endpoint: String,
    /// Multipart field name for the file part
    pub field_name: String,
    /// Suggested filename for the downloaded QR code
    pub download_name: String,
    /// Preview edge length in pixels
    pub preview_size: u32,
    /// Accepted MIME pattern (only `type/*` or exact types)
    pub accept: String,
}

impl UploadConfig {
    /// Default configuration pointed at a different endpoint
    pub fn with_endpoint(endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            source,
        })?;

        Ok(Self {
            endpoint: endpoint.into(),
            ..Self::default()
        })
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            download_name: DEFAULT_DOWNLOAD_NAME.to_string(),
            preview_size: DEFAULT_PREVIEW_SIZE,
            accept: ACCEPT_IMAGES.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UploadConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.field_name, "file");
        assert_eq!(config.download_name, "qr.png");
        assert_eq!(config.preview_size, 256);
        assert_eq!(config.accept, "image/*");
    }

    #[test]
    fn test_with_endpoint_keeps_other_defaults() {
        let config = UploadConfig::with_endpoint("http://127.0.0.1:9000/qr").unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/qr");
        assert_eq!(config.download_name, DEFAULT_DOWNLOAD_NAME);
    }

    #[test]
    fn test_with_endpoint_rejects_relative_url() {
        let err = UploadConfig::with_endpoint("/upload/").unwrap_err();
        assert!(err.to_string().contains("/upload/"));
    }
}
