use common::storage::{BlobStore, StoredBlob};
use sea_orm::DbErr;
use tracing::{error, info, warn};

use super::WorkflowError;
use crate::entity::{banner, project};
use crate::records::{NewProject, RecordStore};

/// A file part received from the client, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    /// Normalized declared MIME type.
    pub content_type: String,
    pub data: Vec<u8>,
}

pub struct UploadWorkflow<'a> {
    blobs: &'a dyn BlobStore,
    records: &'a RecordStore,
}

impl<'a> UploadWorkflow<'a> {
    pub fn new(blobs: &'a dyn BlobStore, records: &'a RecordStore) -> Self {
        Self { blobs, records }
    }

    pub async fn upload_banner(
        &self,
        file: Option<UploadedFile>,
    ) -> Result<banner::Model, WorkflowError> {
        let file = file.ok_or(WorkflowError::BadRequest("No file uploaded"))?;

        self.store_then_persist(&file, |file_url| self.records.insert_banner(file_url))
            .await
    }

    pub async fn upload_project(
        &self,
        file: Option<UploadedFile>,
        project: Option<String>,
        year: Option<String>,
    ) -> Result<project::Model, WorkflowError> {
        let (Some(file), Some(project), Some(year)) =
            (file, non_blank(project), non_blank(year))
        else {
            return Err(WorkflowError::BadRequest(
                "Missing file, project name, or year",
            ));
        };

        self.store_then_persist(&file, |file_url| {
            self.records.insert_project(NewProject {
                project,
                year,
                file_url,
            })
        })
        .await
    }

    /// Write the blob, then run `persist` with its URL.
    ///
    /// If `persist` fails the blob is deleted before the database error is returned.
    async fn store_then_persist<T, F, Fut>(
        &self,
        file: &UploadedFile,
        persist: F,
    ) -> Result<T, WorkflowError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, DbErr>>,
    {
        let blob = self
            .blobs
            .store(&file.data, &file.filename, &file.content_type)
            .await?;

        match persist(blob.url.clone()).await {
            Ok(record) => {
                info!(blob = %blob.name, "Upload persisted");
                Ok(record)
            }
            Err(err) => {
                warn!(blob = %blob.name, error = %err, "Record insert failed, rolling back blob");
                self.rollback(&blob).await;
                Err(err.into())
            }
        }
    }

    /// Failures here are logged only; the caller reports the original error.
    async fn rollback(&self, blob: &StoredBlob) {
        match self.blobs.delete(&blob.name).await {
            Ok(true) => {}
            Ok(false) => error!(blob = %blob.name, "Rollback found no blob to delete"),
            Err(e) => error!(blob = %blob.name, error = %e, "Rollback failed, blob orphaned"),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
