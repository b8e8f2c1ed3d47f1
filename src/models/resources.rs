use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `resources` table (downloadable files).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub file: String,
    pub thumbnail: Option<String>,
    pub file_type: String,
    pub file_size: String,
    pub downloads: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio::Entity",
        from = "Column::PortfolioId",
        to = "super::portfolio::Column::Id",
        on_delete = "Cascade"
    )]
    Portfolio,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    pub title: String,
    pub description: String,
    pub file: String,
    pub thumbnail: Option<String>,
    pub file_type: Option<String>,
    pub file_size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub file: String,
    pub thumbnail: Option<String>,
    pub file_type: String,
    pub file_size: String,
    pub downloads: i32,
    pub created_at: DateTimeUtc,
}

impl From<Model> for ResourceResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            file: m.file,
            thumbnail: m.thumbnail,
            file_type: m.file_type,
            file_size: m.file_size,
            downloads: m.downloads,
            created_at: m.created_at,
        }
    }
}
