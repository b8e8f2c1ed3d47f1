use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::split_csv;

/// SeaORM entity for the `company_profiles` table.
///
/// A partial unique index allows at most one row with `is_active = true`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub tagline: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub logo: Option<String>,
    pub website: String,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    /// Comma-separated; see [`split_csv`].
    #[sea_orm(column_type = "Text")]
    pub services: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub twitter_url: String,
    pub meta_title: String,
    #[sea_orm(column_type = "Text")]
    pub meta_description: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCompanyProfile {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub services: String,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfileResponse {
    pub id: i32,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub logo: Option<String>,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub services: String,
    pub services_list: Vec<String>,
    pub linkedin_url: String,
    pub github_url: String,
    pub twitter_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl From<Model> for CompanyProfileResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            services_list: split_csv(&m.services),
            name: m.name,
            tagline: m.tagline,
            description: m.description,
            logo: m.logo,
            website: m.website,
            email: m.email,
            phone: m.phone,
            address: m.address,
            services: m.services,
            linkedin_url: m.linkedin_url,
            github_url: m.github_url,
            twitter_url: m.twitter_url,
            meta_title: m.meta_title,
            meta_description: m.meta_description,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
