use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::storage::StorageError;
use sea_orm::DbErr;
use serde::Serialize;

use crate::workflow::WorkflowError;

/// Error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description.
    #[schema(example = "No file uploaded")]
    pub error: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// The uploaded file is not a JPEG, PNG or WebP image.
    UnsupportedMediaType,
    NotFound(String),
    /// Any relational engine failure. Contains the detail that is logged.
    Database(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        let (status, error) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UnsupportedMediaType => (
                StatusCode::BAD_REQUEST,
                "Only JPG, PNG, or WEBP files allowed".into(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Database(detail) => {
                tracing::error!("Database error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".into())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };
        (status, ErrorBody { error })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UnsupportedMediaType(content_type) => {
                tracing::warn!("Rejected upload with content type {content_type}");
                AppError::UnsupportedMediaType
            }
            StorageError::InvalidFilename(reason) => {
                AppError::Validation(format!("Invalid filename: {reason}"))
            }
            StorageError::NotFound(_) => AppError::NotFound("File not found".into()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::BadRequest(msg) => AppError::Validation(msg.into()),
            WorkflowError::Storage(e) => e.into(),
            WorkflowError::NotFound(kind) => AppError::NotFound(format!("{kind} not found")),
            WorkflowError::Database(e) => e.into(),
        }
    }
}
