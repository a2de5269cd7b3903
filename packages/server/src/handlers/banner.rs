use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::path::AppPath;
use crate::extractors::upload::UploadForm;
use crate::models::banner::{BannerCreatedResponse, BannerResponse};
use crate::models::shared::MessageResponse;
use crate::records::ResourceKind;
use crate::state::AppState;
use crate::workflow::{DeleteWorkflow, UploadWorkflow};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Banners",
    operation_id = "uploadBanner",
    summary = "Upload a banner image",
    description = "Stores the `file` multipart part (JPEG, PNG or WebP) and records its URL. \
        If the record cannot be saved the stored file is removed again.",
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 201, description = "Banner created", body = BannerCreatedResponse),
        (status = 400, description = "No file, invalid filename or unsupported image type", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody),
    ),
)]
#[instrument(skip(state, form))]
pub async fn upload_banner(
    State(state): State<AppState>,
    form: UploadForm,
) -> Result<impl IntoResponse, AppError> {
    let banner = UploadWorkflow::new(&*state.blob_store, &state.records)
        .upload_banner(form.file)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BannerCreatedResponse::from(banner)),
    ))
}

#[utoipa::path(
    get,
    path = "/banners",
    tag = "Banners",
    operation_id = "listBanners",
    summary = "List all banners",
    responses(
        (status = 200, description = "All banners in insertion order", body = Vec<BannerResponse>),
        (status = 500, description = "Database error", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_banners(
    State(state): State<AppState>,
) -> Result<Json<Vec<BannerResponse>>, AppError> {
    let banners = state.records.list_banners().await?;
    Ok(Json(banners.into_iter().map(BannerResponse::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/banners/{id}",
    tag = "Banners",
    operation_id = "deleteBanner",
    summary = "Delete a banner and its image",
    description = "Removes the record. The image file is deleted best-effort; \
        a missing file does not fail the request.",
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "Banner deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID", body = ErrorBody),
        (status = 404, description = "Banner not found", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_banner(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    DeleteWorkflow::new(&*state.blob_store, &state.records)
        .delete(ResourceKind::Banner, id)
        .await?;

    Ok(Json(MessageResponse::new("Banner deleted successfully")))
}
