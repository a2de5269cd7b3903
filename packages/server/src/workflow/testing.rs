use std::path::PathBuf;

use async_trait::async_trait;
use common::storage::filesystem::FilesystemBlobStore;
use common::storage::{BlobStore, BoxReader, StorageError, StoredBlob};
use sea_orm::{ConnectionTrait, DatabaseConnection};

enum DeleteFault {
    /// Every delete fails with an I/O error and leaves the blob in place.
    Io,
    /// The blob is deleted, then the table is dropped.
    DropTable {
        db: DatabaseConnection,
        table: &'static str,
    },
}

/// Filesystem store with a broken `delete`.
pub struct FaultyBlobStore {
    inner: FilesystemBlobStore,
    fault: DeleteFault,
}

impl FaultyBlobStore {
    pub fn failing_deletes(base_path: impl Into<PathBuf>) -> Self {
        Self {
            inner: FilesystemBlobStore::new(base_path, "http://localhost:5000"),
            fault: DeleteFault::Io,
        }
    }

    pub fn dropping_table_on_delete(
        base_path: impl Into<PathBuf>,
        db: DatabaseConnection,
        table: &'static str,
    ) -> Self {
        Self {
            inner: FilesystemBlobStore::new(base_path, "http://localhost:5000"),
            fault: DeleteFault::DropTable { db, table },
        }
    }
}

#[async_trait]
impl BlobStore for FaultyBlobStore {
    async fn store(
        &self,
        data: &[u8],
        original_filename: &str,
        content_type: &str,
    ) -> Result<StoredBlob, StorageError> {
        self.inner.store(data, original_filename, content_type).await
    }

    async fn open(&self, name: &str) -> Result<BoxReader, StorageError> {
        self.inner.open(name).await
    }

    async fn exists(&self, name: &str) -> Result<bool, StorageError> {
        self.inner.exists(name).await
    }

    async fn delete(&self, name: &str) -> Result<bool, StorageError> {
        match &self.fault {
            DeleteFault::Io => Err(StorageError::Io(std::io::Error::other("disk unavailable"))),
            DeleteFault::DropTable { db, table } => {
                let deleted = self.inner.delete(name).await?;
                db.execute_unprepared(&format!("DROP TABLE {table}"))
                    .await
                    .map_err(|e| StorageError::Io(std::io::Error::other(e.to_string())))?;
                Ok(deleted)
            }
        }
    }

    fn url_for(&self, name: &str) -> String {
        self.inner.url_for(name)
    }
}
