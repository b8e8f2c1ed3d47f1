use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `testimonials` table.
///
/// `rating` is meant to be 1..=5 but the column does not enforce it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub project_id: Option<i32>,
    pub client_name: String,
    pub client_role: String,
    pub client_company: String,
    pub client_image: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub rating: i32,
    pub is_featured: bool,
    pub order: i32,
    pub date: Option<Date>,
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
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_delete = "SetNull"
    )]
    Project,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub client_name: String,
    pub client_role: Option<String>,
    pub client_company: Option<String>,
    pub client_image: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub project_id: Option<i32>,
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
    pub date: Option<Date>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialResponse {
    pub id: i32,
    pub client_name: String,
    pub client_role: String,
    pub client_company: String,
    pub client_image: Option<String>,
    pub content: String,
    pub rating: i32,
    pub project: Option<i32>,
    pub project_title: Option<String>,
    pub is_featured: bool,
    pub order: i32,
    pub date: Option<Date>,
}

impl TestimonialResponse {
    pub fn new(m: Model, project_title: Option<String>) -> Self {
        Self {
            id: m.id,
            client_name: m.client_name,
            client_role: m.client_role,
            client_company: m.client_company,
            client_image: m.client_image,
            content: m.content,
            rating: m.rating,
            project: m.project_id,
            project_title,
            is_featured: m.is_featured,
            order: m.order,
            date: m.date,
        }
    }
}
