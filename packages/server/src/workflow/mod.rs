//! Upload and delete flows that keep blobs and record rows in step.
//!
//! There is no transaction spanning the filesystem and the database. Uploads write
//! the blob first and delete it again if the row cannot be inserted; deletes remove
//! the blob best-effort and then the row.

mod delete;
#[cfg(test)]
mod testing;
mod upload;

use common::storage::StorageError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::records::ResourceKind;

pub use delete::DeleteWorkflow;
pub use upload::{UploadWorkflow, UploadedFile};

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Required input missing; nothing was written.
    #[error("{0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0} not found")]
    NotFound(ResourceKind),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}
