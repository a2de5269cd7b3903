use serde::Serialize;

use crate::entity::banner;

/// Response DTO for a freshly uploaded banner.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BannerCreatedResponse {
    #[schema(example = 1)]
    pub id: i32,
    /// Public URL of the stored image.
    #[serde(rename = "fileUrl")]
    #[schema(example = "http://localhost:5000/uploads/1718000000000_hero.png")]
    pub file_url: String,
}

/// Response DTO for a banner in a listing.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BannerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "http://localhost:5000/uploads/1718000000000_hero.png")]
    pub file_url: String,
}

impl From<banner::Model> for BannerCreatedResponse {
    fn from(model: banner::Model) -> Self {
        Self {
            id: model.id,
            file_url: model.file_url,
        }
    }
}

impl From<banner::Model> for BannerResponse {
    fn from(model: banner::Model) -> Self {
        Self {
            id: model.id,
            file_url: model.file_url,
        }
    }
}
