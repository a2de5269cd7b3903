use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::path::AppPath;
use crate::extractors::upload::UploadForm;
use crate::models::project::{ProjectCreatedResponse, ProjectResponse};
use crate::models::shared::MessageResponse;
use crate::records::ResourceKind;
use crate::state::AppState;
use crate::workflow::{DeleteWorkflow, UploadWorkflow};

#[utoipa::path(
    post,
    path = "/projects/upload",
    tag = "Projects",
    operation_id = "uploadProject",
    summary = "Upload a project image",
    description = "Requires the `file` part (JPEG, PNG or WebP) and the `project` and `year` \
        text fields. If the record cannot be saved the stored file is removed again.",
    request_body(content_type = "multipart/form-data", description = "`file`, `project` and `year` fields"),
    responses(
        (status = 201, description = "Project created", body = ProjectCreatedResponse),
        (status = 400, description = "Missing fields, invalid filename or unsupported image type", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody),
    ),
)]
#[instrument(skip(state, form))]
pub async fn upload_project(
    State(state): State<AppState>,
    form: UploadForm,
) -> Result<impl IntoResponse, AppError> {
    let project = UploadWorkflow::new(&*state.blob_store, &state.records)
        .upload_project(form.file, form.project, form.year)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectCreatedResponse::from(project)),
    ))
}

#[utoipa::path(
    get,
    path = "/projects",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List all projects",
    responses(
        (status = 200, description = "All projects in insertion order", body = Vec<ProjectResponse>),
        (status = 500, description = "Database error", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = state.records.list_projects().await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "Projects",
    operation_id = "deleteProject",
    summary = "Delete a project and its image",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID", body = ErrorBody),
        (status = 404, description = "Project not found", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    DeleteWorkflow::new(&*state.blob_store, &state.records)
        .delete(ResourceKind::Project, id)
        .await?;

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
