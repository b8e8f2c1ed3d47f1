use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    #[sea_orm(string_value = "award")]
    Award,
    #[sea_orm(string_value = "certification")]
    Certification,
    #[sea_orm(string_value = "recognition")]
    Recognition,
    #[sea_orm(string_value = "publication")]
    Publication,
    #[sea_orm(string_value = "other")]
    Other,
}

/// SeaORM entity for the `achievements` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub title: String,
    #[sea_orm(column_name = "type")]
    pub achievement_type: AchievementType,
    pub issuer: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: Option<String>,
    pub credential_url: String,
    pub date_received: Date,
    pub expiry_date: Option<Date>,
    pub order: i32,
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
pub struct CreateAchievement {
    pub title: String,
    #[serde(rename = "type")]
    pub achievement_type: Option<AchievementType>,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub credential_url: Option<String>,
    pub date_received: Date,
    pub expiry_date: Option<Date>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementResponse {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    pub issuer: String,
    pub description: String,
    pub image: Option<String>,
    pub credential_url: String,
    pub date_received: Date,
    pub expiry_date: Option<Date>,
    pub order: i32,
}

impl From<Model> for AchievementResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            achievement_type: m.achievement_type,
            issuer: m.issuer,
            description: m.description,
            image: m.image,
            credential_url: m.credential_url,
            date_received: m.date_received,
            expiry_date: m.expiry_date,
            order: m.order,
        }
    }
}
