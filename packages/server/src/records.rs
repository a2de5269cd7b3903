use std::fmt;

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::config::DatabaseConfig;
use crate::database::init_db;
use crate::entity::{banner, project};

/// The two record tables served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Banner,
    Project,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Banner => "Banner",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields of a project row before the database assigns its id.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub project: String,
    pub year: String,
    pub file_url: String,
}

/// Relational storage for banner and project rows.
///
/// Owns the connection pool: open it with [`RecordStore::connect`] at startup and
/// release it with [`RecordStore::close`] at shutdown. Deleting a row never touches
/// the blob it references.
#[derive(Clone)]
pub struct RecordStore {
    db: DatabaseConnection,
}

impl RecordStore {
    /// Connect and make sure both tables exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        Ok(Self::new(init_db(config).await?))
    }

    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }

    pub async fn insert_banner(&self, file_url: String) -> Result<banner::Model, DbErr> {
        banner::ActiveModel {
            file_url: Set(file_url),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    pub async fn list_banners(&self) -> Result<Vec<banner::Model>, DbErr> {
        banner::Entity::find()
            .order_by_asc(banner::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_banner(&self, id: i32) -> Result<Option<banner::Model>, DbErr> {
        banner::Entity::find_by_id(id).one(&self.db).await
    }

    pub async fn insert_project(&self, new: NewProject) -> Result<project::Model, DbErr> {
        project::ActiveModel {
            project: Set(new.project),
            year: Set(new.year),
            file_url: Set(new.file_url),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    pub async fn list_projects(&self) -> Result<Vec<project::Model>, DbErr> {
        project::Entity::find()
            .order_by_asc(project::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_project(&self, id: i32) -> Result<Option<project::Model>, DbErr> {
        project::Entity::find_by_id(id).one(&self.db).await
    }

    /// The blob URL a row references, or `None` if the row does not exist.
    pub async fn file_url_of(&self, kind: ResourceKind, id: i32) -> Result<Option<String>, DbErr> {
        let url = match kind {
            ResourceKind::Banner => self.find_banner(id).await?.map(|m| m.file_url),
            ResourceKind::Project => self.find_project(id).await?.map(|m| m.file_url),
        };
        Ok(url)
    }

    /// Delete a row by id. Returns the number of rows removed.
    pub async fn delete(&self, kind: ResourceKind, id: i32) -> Result<u64, DbErr> {
        let result = match kind {
            ResourceKind::Banner => banner::Entity::delete_by_id(id).exec(&self.db).await?,
            ResourceKind::Project => project::Entity::delete_by_id(id).exec(&self.db).await?,
        };
        Ok(result.rows_affected)
    }
}
