use axum::body::Body;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;
use tokio_util::io::ReaderStream;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/uploads/{name}",
    tag = "Uploads",
    operation_id = "getUpload",
    summary = "Download an uploaded image",
    params(("name" = String, Path, description = "Stored file name, the last segment of a `fileUrl`")),
    responses(
        (status = 200, description = "Image content"),
        (status = 400, description = "Invalid file name", body = ErrorBody),
        (status = 404, description = "File not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn serve_upload(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(name) = name.map_err(|e| {
        tracing::debug!("Rejected upload name: {}", e.body_text());
        AppError::Validation("Invalid file name".into())
    })?;
    let reader = state.blob_store.open(&name).await?;
    let mime = mime_guess::from_path(&name).first_or_octet_stream();

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from_stream(ReaderStream::new(reader)))
        .map_err(|e| AppError::Internal(e.to_string()))
}
