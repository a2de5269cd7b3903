use common::storage::BlobStore;
use tracing::{info, warn};

use super::WorkflowError;
use crate::records::{RecordStore, ResourceKind};

pub struct DeleteWorkflow<'a> {
    blobs: &'a dyn BlobStore,
    records: &'a RecordStore,
}

impl<'a> DeleteWorkflow<'a> {
    pub fn new(blobs: &'a dyn BlobStore, records: &'a RecordStore) -> Self {
        Self { blobs, records }
    }

    /// Remove a row and, best-effort, the blob it references.
    ///
    /// A blob that cannot be deleted is logged and left behind; the row is removed
    /// regardless. If the row delete then fails, the blob stays gone.
    pub async fn delete(&self, kind: ResourceKind, id: i32) -> Result<(), WorkflowError> {
        let file_url = self
            .records
            .file_url_of(kind, id)
            .await?
            .ok_or(WorkflowError::NotFound(kind))?;

        let name = self.blobs.name_from_url(&file_url);
        match self.blobs.delete(name).await {
            Ok(true) => {}
            Ok(false) => warn!(%kind, id, blob = name, "File deletion warning: blob already absent"),
            Err(e) => warn!(%kind, id, blob = name, error = %e, "File deletion warning"),
        }

        self.records.delete(kind, id).await?;
        info!(%kind, id, "Record deleted");

        Ok(())
    }
}
