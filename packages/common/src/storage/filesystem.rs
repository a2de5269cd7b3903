use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::BufReader;

use super::error::StorageError;
use super::mime::is_allowed_image_type;
use super::name::{generate_stored_name, validate_stored_name};
use super::traits::{BlobStore, BoxReader, StoredBlob};

/// Filesystem-backed blob store.
///
/// Blobs live flat in a single directory as `{base_path}/{millis}_{filename}` and are
/// published as `{base_url}/uploads/{millis}_{filename}`. The directory is created on
/// the first write.
pub struct FilesystemBlobStore {
    base_path: PathBuf,
    base_url: String,
}

impl FilesystemBlobStore {
    /// Create a new filesystem blob store. Nothing is touched on disk yet.
    pub fn new(base_path: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_path: base_path.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Directory holding the blobs.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Compute the filesystem path for a validated name.
    fn blob_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        Ok(self.base_path.join(validate_stored_name(name)?))
    }
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    async fn store(
        &self,
        data: &[u8],
        original_filename: &str,
        content_type: &str,
    ) -> Result<StoredBlob, StorageError> {
        if !is_allowed_image_type(content_type) {
            return Err(StorageError::UnsupportedMediaType(content_type.to_string()));
        }

        let name = generate_stored_name(original_filename)?;
        let blob_path = self.blob_path(&name)?;

        fs::create_dir_all(&self.base_path).await?;

        if let Err(e) = fs::write(&blob_path, data).await {
            let _ = fs::remove_file(&blob_path).await;
            return Err(e.into());
        }

        tracing::debug!(blob = %name, size = data.len(), "Blob stored");

        let url = self.url_for(&name);
        Ok(StoredBlob { name, url })
    }

    async fn open(&self, name: &str) -> Result<BoxReader, StorageError> {
        let blob_path = self.blob_path(name)?;
        match fs::File::open(&blob_path).await {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &str) -> Result<bool, StorageError> {
        let blob_path = self.blob_path(name)?;
        Ok(fs::try_exists(&blob_path).await?)
    }

    async fn delete(&self, name: &str) -> Result<bool, StorageError> {
        let blob_path = self.blob_path(name)?;
        match fs::remove_file(&blob_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/uploads/{}", self.base_url, name)
    }
}
