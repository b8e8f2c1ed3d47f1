use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[sea_orm(string_value = "programming")]
    Programming,
    #[sea_orm(string_value = "framework")]
    Framework,
    #[sea_orm(string_value = "database")]
    Database,
    #[sea_orm(string_value = "tool")]
    Tool,
    #[sea_orm(string_value = "soft")]
    Soft,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
    #[sea_orm(string_value = "expert")]
    Expert,
}

/// SeaORM entity for the `skills` table. Listed by (`order`, `name`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    pub proficiency_percentage: i32,
    pub icon: String,
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
pub struct CreateSkill {
    pub name: String,
    pub category: Option<SkillCategory>,
    pub proficiency: Option<Proficiency>,
    pub proficiency_percentage: Option<i32>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResponse {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    pub proficiency_percentage: i32,
    pub icon: String,
    pub order: i32,
}

impl From<Model> for SkillResponse {
    fn from(m: Model) -> Self {
        Self {
            name: m.name,
            category: m.category,
            proficiency: m.proficiency,
            proficiency_percentage: m.proficiency_percentage,
            icon: m.icon,
            order: m.order,
        }
    }
}
