use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `abouts` table (1:1 with a portfolio).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "abouts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub portfolio_id: i32,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "Text")]
    pub background: String,
    #[sea_orm(column_type = "Text")]
    pub career_path: String,
    #[sea_orm(column_type = "Text")]
    pub values: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub twitter_url: String,
    pub website_url: String,
    pub resume_file: Option<String>,
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

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAbout {
    pub bio: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub career_path: String,
    #[serde(default)]
    pub values: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub twitter_url: String,
    #[serde(default)]
    pub website_url: String,
    pub resume_file: Option<String>,
}

/// About section without its linkage fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutResponse {
    pub bio: String,
    pub background: String,
    pub career_path: String,
    pub values: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub twitter_url: String,
    pub website_url: String,
    pub resume_file: Option<String>,
}

impl From<Model> for AboutResponse {
    fn from(m: Model) -> Self {
        Self {
            bio: m.bio,
            background: m.background,
            career_path: m.career_path,
            values: m.values,
            location: m.location,
            email: m.email,
            phone: m.phone,
            linkedin_url: m.linkedin_url,
            github_url: m.github_url,
            twitter_url: m.twitter_url,
            website_url: m.website_url,
            resume_file: m.resume_file,
        }
    }
}
