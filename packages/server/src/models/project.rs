use serde::Serialize;

use crate::entity::project;

/// Response DTO for a freshly uploaded project image.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProjectCreatedResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "fileUrl")]
    #[schema(example = "http://localhost:5000/uploads/1718000000000_atrium.png")]
    pub file_url: String,
    #[schema(example = "Atrium")]
    pub project: String,
    #[schema(example = "2024")]
    pub year: String,
}

/// Response DTO for a project in a listing.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProjectResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Atrium")]
    pub project: String,
    #[schema(example = "2024")]
    pub year: String,
    #[schema(example = "http://localhost:5000/uploads/1718000000000_atrium.png")]
    pub file_url: String,
}

impl From<project::Model> for ProjectCreatedResponse {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            file_url: model.file_url,
            project: model.project,
            year: model.year,
        }
    }
}

impl From<project::Model> for ProjectResponse {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            project: model.project,
            year: model.year,
            file_url: model.file_url,
        }
    }
}
