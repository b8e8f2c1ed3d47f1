use std::collections::HashMap;

use sea_orm::*;

use crate::db::{projects, sections};
use crate::models::portfolio::{
    self, CreatePortfolio, PortfolioCarousel, PortfolioDetail, PortfolioSummary,
    DEFAULT_THEME_COLOR, is_hex_color, is_reserved_username,
};
use crate::models::skills::SkillResponse;
use crate::models::{PaginationQuery, slugify, users};

/// Fetch a portfolio by `username`, only if it is active.
pub async fn find_active_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::Username.eq(username))
        .filter(portfolio::Column::IsActive.eq(true))
        .one(db)
        .await
}

/// Active portfolios, newest first, one page at a time.
pub async fn list_active_portfolios(
    db: &DatabaseConnection,
    page: &PaginationQuery,
) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::IsActive.eq(true))
        .order_by_desc(portfolio::Column::CreatedAt)
        .order_by_desc(portfolio::Column::Id)
        .offset(page.offset())
        .limit(page.limit())
        .all(db)
        .await
}

pub async fn get_portfolio_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find_by_id(id).one(db).await
}

/// Create the portfolio owned by `owner`.
///
/// A missing or blank `username` is derived from the owner's account name.
/// Names that collide with fixed routes (`company`, `portfolios`) are refused.
pub async fn create_portfolio(
    db: &DatabaseConnection,
    owner: &users::Model,
    input: CreatePortfolio,
) -> Result<portfolio::Model, DbErr> {
    let username = match input.username.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => slugify(&owner.username),
    };
    if username.is_empty() {
        return Err(DbErr::Custom(format!(
            "cannot derive a portfolio username from '{}'",
            owner.username
        )));
    }
    if is_reserved_username(&username) {
        return Err(DbErr::Custom(format!(
            "portfolio username '{username}' is reserved"
        )));
    }

    let theme_color = input
        .theme_color
        .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string());
    if !is_hex_color(&theme_color) {
        return Err(DbErr::Custom(format!(
            "theme_color must be a #RRGGBB hex string, got '{theme_color}'"
        )));
    }

    let now = chrono::Utc::now();
    let new_portfolio = portfolio::ActiveModel {
        user_id: Set(owner.id),
        name: Set(input.name.unwrap_or_else(|| owner.username.clone())),
        username: Set(username),
        tagline: Set(input.tagline.unwrap_or_default()),
        profile_image: Set(input.profile_image),
        is_active: Set(input.is_active.unwrap_or(true)),
        theme_color: Set(theme_color),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_portfolio.insert(db).await
}

/// Flip a portfolio's public visibility.
pub async fn set_portfolio_active(
    db: &DatabaseConnection,
    id: i32,
    is_active: bool,
) -> Result<portfolio::Model, DbErr> {
    let item = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio not found".to_string()))?;

    let mut active: portfolio::ActiveModel = item.into();
    active.is_active = Set(is_active);
    active.updated_at = Set(chrono::Utc::now());
    active.update(db).await
}

/// Delete a portfolio; dependent rows go with it through FK cascades.
pub async fn delete_portfolio(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_by_id(id).exec(db).await
}

/// Assemble the full nested page for one portfolio.
pub async fn load_detail(
    db: &DatabaseConnection,
    portfolio: portfolio::Model,
) -> Result<PortfolioDetail, DbErr> {
    let id = portfolio.id;

    let about = sections::get_about(db, id).await?;
    let skills = sections::get_skills(db, id).await?;
    let projects = projects::list_projects(db, id, false).await?;
    let services = sections::get_services(db, id).await?;
    let testimonials = sections::get_testimonials(db, id).await?;
    let achievements = sections::get_achievements(db, id).await?;
    let hobbies = sections::get_hobbies(db, id).await?;

    let created_at = portfolio.created_at;
    let updated_at = portfolio.updated_at;

    Ok(PortfolioDetail {
        summary: PortfolioSummary::from(portfolio),
        about: about.map(Into::into),
        skills: skills.into_iter().map(Into::into).collect(),
        projects,
        services: services.into_iter().map(Into::into).collect(),
        testimonials,
        achievements: achievements.into_iter().map(Into::into).collect(),
        hobbies: hobbies.into_iter().map(Into::into).collect(),
        created_at,
        updated_at,
    })
}

/// Summary plus skills for each portfolio, with the skills fetched in one query.
pub async fn load_carousels(
    db: &DatabaseConnection,
    portfolios: Vec<portfolio::Model>,
) -> Result<Vec<PortfolioCarousel>, DbErr> {
    let ids = portfolios.iter().map(|p| p.id).collect();
    let mut skills_by_portfolio: HashMap<i32, Vec<SkillResponse>> = HashMap::new();
    for skill in sections::get_skills_for_portfolios(db, ids).await? {
        skills_by_portfolio
            .entry(skill.portfolio_id)
            .or_default()
            .push(skill.into());
    }

    Ok(portfolios
        .into_iter()
        .map(|p| PortfolioCarousel {
            skills: skills_by_portfolio.remove(&p.id).unwrap_or_default(),
            summary: PortfolioSummary::from(p),
        })
        .collect())
}
