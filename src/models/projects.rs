use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::case_studies::CaseStudyResponse;
use super::split_csv;
use super::testimonials::TestimonialResponse;

/// SeaORM entity for the `projects` table.
///
/// Listed featured-first, then by `order`, then newest first. `slug` is unique per
/// portfolio.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub title: String,
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub detailed_description: String,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    /// Comma-separated; see [`split_csv`].
    pub technologies: String,
    pub live_url: String,
    pub github_url: String,
    pub demo_url: String,
    #[sea_orm(column_type = "Text")]
    pub outcome: String,
    pub is_featured: bool,
    pub order: i32,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
    #[sea_orm(has_one = "super::case_studies::Entity")]
    CaseStudy,
    #[sea_orm(has_many = "super::testimonials::Entity")]
    Testimonials,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl Related<super::case_studies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CaseStudy.def()
    }
}

impl Related<super::testimonials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Testimonials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub detailed_description: Option<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub technologies: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub outcome: Option<String>,
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// Project with its case study and testimonials, linkage fields removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: String,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub technologies: String,
    pub technologies_list: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub demo_url: String,
    pub outcome: String,
    pub is_featured: bool,
    pub order: i32,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub case_study: Option<CaseStudyResponse>,
    pub testimonials: Vec<TestimonialResponse>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ProjectResponse {
    pub fn new(
        m: Model,
        case_study: Option<CaseStudyResponse>,
        testimonials: Vec<TestimonialResponse>,
    ) -> Self {
        Self {
            id: m.id,
            technologies_list: split_csv(&m.technologies),
            title: m.title,
            slug: m.slug,
            description: m.description,
            detailed_description: m.detailed_description,
            image: m.image,
            thumbnail: m.thumbnail,
            technologies: m.technologies,
            live_url: m.live_url,
            github_url: m.github_url,
            demo_url: m.demo_url,
            outcome: m.outcome,
            is_featured: m.is_featured,
            order: m.order,
            start_date: m.start_date,
            end_date: m.end_date,
            case_study,
            testimonials,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
