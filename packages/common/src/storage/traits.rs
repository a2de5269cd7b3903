use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::error::StorageError;
use super::name::url_to_stored_name;

/// Type alias for a boxed async reader.
pub type BoxReader = Box<dyn AsyncRead + Unpin + Send>;

/// A blob that has been written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// Name of the blob inside the store.
    pub name: String,
    /// Public URL the blob is served under.
    pub url: String,
}

/// Name-addressed storage for uploaded images.
///
/// Callers only ever see a [`StoredBlob`] and its URL, so the naming scheme is an
/// implementation detail of the store.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `data` under a freshly generated name.
    ///
    /// Fails with [`StorageError::UnsupportedMediaType`] before touching storage
    /// when `content_type` is not an allowed image type.
    async fn store(
        &self,
        data: &[u8],
        original_filename: &str,
        content_type: &str,
    ) -> Result<StoredBlob, StorageError>;

    /// Retrieve a blob as a streaming async reader.
    async fn open(&self, name: &str) -> Result<BoxReader, StorageError>;

    /// Retrieve all bytes for a blob.
    async fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let mut reader = self.open(name).await?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    /// Check whether a blob exists.
    async fn exists(&self, name: &str) -> Result<bool, StorageError>;

    /// Delete a blob by name.
    ///
    /// Returns `true` if the blob was deleted, `false` if it did not exist.
    async fn delete(&self, name: &str) -> Result<bool, StorageError>;

    /// Public URL for a stored name.
    fn url_for(&self, name: &str) -> String;

    /// Recover the stored name from a URL produced by [`BlobStore::url_for`].
    fn name_from_url<'a>(&self, url: &'a str) -> &'a str {
        url_to_stored_name(url)
    }
}
