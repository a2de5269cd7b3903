use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Public URL of the uploaded image.
    #[sea_orm(column_type = "Text")]
    pub file_url: String,
}

impl ActiveModelBehavior for ActiveModel {}
