use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::split_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

/// SeaORM entity for the `blog_posts` table. Only published posts are public.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub title: String,
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub featured_image: Option<String>,
    pub tags: String,
    pub status: PostStatus,
    pub is_featured: bool,
    pub views: i32,
    pub published_at: Option<DateTimeUtc>,
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
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub tags: Option<String>,
    pub status: Option<PostStatus>,
    pub is_featured: Option<bool>,
    pub published_at: Option<DateTimeUtc>,
}

/// Lighter shape used by blog listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub tags_list: Vec<String>,
    pub is_featured: bool,
    pub views: i32,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

impl From<Model> for BlogPostSummary {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            tags_list: split_csv(&m.tags),
            title: m.title,
            slug: m.slug,
            excerpt: m.excerpt,
            featured_image: m.featured_image,
            is_featured: m.is_featured,
            views: m.views,
            published_at: m.published_at,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub tags: String,
    pub tags_list: Vec<String>,
    pub status: PostStatus,
    pub is_featured: bool,
    pub views: i32,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl From<Model> for BlogPostResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            tags_list: split_csv(&m.tags),
            title: m.title,
            slug: m.slug,
            excerpt: m.excerpt,
            content: m.content,
            featured_image: m.featured_image,
            tags: m.tags,
            status: m.status,
            is_featured: m.is_featured,
            views: m.views,
            published_at: m.published_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
