use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `case_studies` table (1:1 with a project).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_studies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub project_id: i32,
    #[sea_orm(column_type = "Text")]
    pub challenge: String,
    #[sea_orm(column_type = "Text")]
    pub solution: String,
    #[sea_orm(column_type = "Text")]
    pub process: String,
    #[sea_orm(column_type = "Text")]
    pub results: String,
    #[sea_orm(column_type = "Text")]
    pub lessons_learned: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCaseStudy {
    pub challenge: String,
    pub solution: String,
    #[serde(default)]
    pub process: String,
    #[serde(default)]
    pub results: String,
    #[serde(default)]
    pub lessons_learned: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudyResponse {
    pub challenge: String,
    pub solution: String,
    pub process: String,
    pub results: String,
    pub lessons_learned: String,
}

impl From<Model> for CaseStudyResponse {
    fn from(m: Model) -> Self {
        Self {
            challenge: m.challenge,
            solution: m.solution,
            process: m.process,
            results: m.results,
            lessons_learned: m.lessons_learned,
        }
    }
}
