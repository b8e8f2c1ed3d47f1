use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::about::AboutResponse;
use super::achievements::AchievementResponse;
use super::hobbies::HobbyResponse;
use super::projects::ProjectResponse;
use super::services::ServiceResponse;
use super::skills::SkillResponse;
use super::testimonials::TestimonialResponse;

pub const DEFAULT_THEME_COLOR: &str = "#3B82F6";

/// Usernames shadowed by fixed route segments under `/api`.
pub const RESERVED_USERNAMES: [&str; 2] = ["company", "portfolios"];

/// SeaORM entity for the `portfolios` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub name: String,
    pub tagline: String,
    pub profile_image: Option<String>,
    pub is_active: bool,
    pub theme_color: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Owner,
    #[sea_orm(has_one = "super::about::Entity")]
    About,
    #[sea_orm(has_many = "super::skills::Entity")]
    Skills,
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
    #[sea_orm(has_many = "super::services::Entity")]
    Services,
    #[sea_orm(has_many = "super::testimonials::Entity")]
    Testimonials,
    #[sea_orm(has_many = "super::achievements::Entity")]
    Achievements,
    #[sea_orm(has_many = "super::blog_posts::Entity")]
    BlogPosts,
    #[sea_orm(has_many = "super::resources::Entity")]
    Resources,
    #[sea_orm(has_many = "super::newsletter::Entity")]
    Subscribers,
    #[sea_orm(has_many = "super::contact_messages::Entity")]
    Messages,
    #[sea_orm(has_many = "super::hobbies::Entity")]
    Hobbies,
    #[sea_orm(has_many = "super::featured_developers::Entity")]
    Featurings,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::blog_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogPosts.def()
    }
}

impl Related<super::featured_developers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Featurings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Input for creating a portfolio for an existing owner account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePortfolio {
    pub username: Option<String>,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub profile_image: Option<String>,
    pub is_active: Option<bool>,
    pub theme_color: Option<String>,
}

/// `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn is_reserved_username(value: &str) -> bool {
    RESERVED_USERNAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(value))
}

// ── Projections ──

/// Lightweight portfolio view used by listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub tagline: String,
    pub profile_image: Option<String>,
    pub theme_color: String,
}

impl From<Model> for PortfolioSummary {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            name: m.name,
            tagline: m.tagline,
            profile_image: m.profile_image,
            theme_color: m.theme_color,
        }
    }
}

/// Summary plus skills, shown in the company homepage carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioCarousel {
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    pub skills: Vec<SkillResponse>,
}

/// Full nested portfolio page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDetail {
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    pub about: Option<AboutResponse>,
    pub skills: Vec<SkillResponse>,
    pub projects: Vec<ProjectResponse>,
    pub services: Vec<ServiceResponse>,
    pub testimonials: Vec<TestimonialResponse>,
    pub achievements: Vec<AchievementResponse>,
    pub hobbies: Vec<HobbyResponse>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}
