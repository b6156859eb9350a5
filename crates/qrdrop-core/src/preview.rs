//! Preview resources - transient, process-local handles to generated images.
//!
//! A [`PreviewHandle`] plays the role of a browser object URL: it has a
//! locator string, can be rendered (as a data URI) and read back, and owns
//! the underlying bytes in a shared [`PreviewStore`]. Unlike object URLs the
//! entry is released as soon as the handle is dropped, so replacing a
//! preview never accumulates stale resources.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use base64::Engine;
use bytes::Bytes;
use parking_lot::Mutex;
use ulid::Ulid;

/// Scheme prefix of preview locators
pub const LOCATOR_PREFIX: &str = "blob:qrdrop/";

type Entries = Arc<Mutex<HashMap<Ulid, Bytes>>>;

/// Registry of live preview resources.
///
/// Cloning is cheap and every clone refers to the same registry.
#[derive(Clone, Default)]
pub struct PreviewStore {
    entries: Entries,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` and return the handle that owns them
    pub fn create(&self, bytes: impl Into<Bytes>) -> PreviewHandle {
        let id = Ulid::new();
        let bytes = bytes.into();
        self.entries.lock().insert(id, bytes.clone());
        tracing::debug!(%id, len = bytes.len(), "Created preview resource");

        PreviewHandle {
            id,
            bytes,
            entries: Arc::clone(&self.entries),
        }
    }

    /// Read back the content behind a locator, if it is still live
    pub fn resolve(&self, locator: &str) -> Option<Bytes> {
        let id = locator.strip_prefix(LOCATOR_PREFIX)?;
        let id = Ulid::from_string(id).ok()?;
        self.entries.lock().get(&id).cloned()
    }

    /// Number of resources not yet released
    pub fn live_count(&self) -> usize {
        self.entries.lock().len()
    }
}

impl fmt::Debug for PreviewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewStore")
            .field("live", &self.live_count())
            .finish()
    }
}

/// Owning handle to one preview resource; dropping it releases the entry.
pub struct PreviewHandle {
    id: Ulid,
    bytes: Bytes,
    entries: Entries,
}

impl PreviewHandle {
    /// Locator string, resolvable through the owning store while the handle lives
    pub fn locator(&self) -> String {
        format!("{}{}", LOCATOR_PREFIX, self.id)
    }

    /// The exact bytes this handle was created from
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Image type sniffed from the content, `application/octet-stream` if unknown
    pub fn mime(&self) -> &'static str {
        image::guess_format(&self.bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or("application/octet-stream")
    }

    /// Self-contained `data:` URI for an `img` element
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime(), encoded)
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.entries.lock().remove(&self.id);
        tracing::debug!(id = %self.id, "Released preview resource");
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("id", &self.id)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_create_and_resolve() {
        let store = PreviewStore::new();
        let handle = store.create(PNG_MAGIC.to_vec());

        assert!(handle.locator().starts_with(LOCATOR_PREFIX));
        assert_eq!(store.resolve(&handle.locator()).unwrap(), &PNG_MAGIC[..]);
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn test_drop_releases_entry() {
        let store = PreviewStore::new();
        let handle = store.create(vec![1, 2, 3]);
        let locator = handle.locator();

        drop(handle);

        assert_eq!(store.live_count(), 0);
        assert!(store.resolve(&locator).is_none());
    }

    #[test]
    fn test_handles_are_distinct() {
        let store = PreviewStore::new();
        let a = store.create(vec![1]);
        let b = store.create(vec![1]);

        assert_ne!(a.locator(), b.locator());
        assert_eq!(store.live_count(), 2);
        drop(a);
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.resolve(&b.locator()).unwrap(), &[1u8][..]);
    }

    #[test]
    fn test_resolve_rejects_foreign_locators() {
        let store = PreviewStore::new();
        let _handle = store.create(vec![1]);

        assert!(store.resolve("blob:http://localhost/abc").is_none());
        assert!(store.resolve("blob:qrdrop/not-a-ulid").is_none());
    }

    #[test]
    fn test_data_uri_sniffs_png() {
        let store = PreviewStore::new();
        let handle = store.create(PNG_MAGIC.to_vec());

        assert_eq!(handle.mime(), "image/png");
        assert!(handle.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_uri_unknown_content() {
        let store = PreviewStore::new();
        let handle = store.create(b"hello".to_vec());

        assert_eq!(handle.data_uri(), "data:application/octet-stream;base64,aGVsbG8=");
    }
}
