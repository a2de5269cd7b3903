use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub project: String,

    /// Kept as text; numeric years arrive as their decimal form.
    pub year: String,

    #[sea_orm(column_type = "Text")]
    pub file_url: String,
}

impl ActiveModelBehavior for ActiveModel {}
