use sea_orm::prelude::Expr;
use sea_orm::*;

use crate::db::portfolio::{load_carousels, load_detail};
use crate::models::company_profile::{self, CreateCompanyProfile};
use crate::models::featured_developers::{
    self, FeaturedDeveloperDetail, FeaturedDeveloperResponse, FeaturedDeveloperSummary,
};
use crate::models::portfolio;

/// The active company profile. At most one row can be active; the id ordering only
/// makes the read deterministic.
pub async fn get_active_profile(
    db: &DatabaseConnection,
) -> Result<Option<company_profile::Model>, DbErr> {
    company_profile::Entity::find()
        .filter(company_profile::Column::IsActive.eq(true))
        .order_by_asc(company_profile::Column::Id)
        .one(db)
        .await
}

async fn deactivate_all<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    company_profile::Entity::update_many()
        .col_expr(company_profile::Column::IsActive, Expr::value(false))
        .col_expr(
            company_profile::Column::UpdatedAt,
            Expr::value(chrono::Utc::now()),
        )
        .filter(company_profile::Column::IsActive.eq(true))
        .exec(conn)
        .await?;
    Ok(())
}

/// Insert a company profile. When it is active, every other profile is deactivated
/// in the same transaction.
pub async fn create_company_profile(
    db: &DatabaseConnection,
    input: CreateCompanyProfile,
) -> Result<company_profile::Model, DbErr> {
    let is_active = input.is_active.unwrap_or(true);
    let now = chrono::Utc::now();

    let new_profile = company_profile::ActiveModel {
        name: Set(input.name.unwrap_or_else(|| "DevLink Technologies".to_string())),
        tagline: Set(input.tagline.unwrap_or_default()),
        description: Set(input.description),
        logo: Set(input.logo),
        website: Set(input.website.unwrap_or_default()),
        email: Set(input.email.unwrap_or_default()),
        phone: Set(input.phone.unwrap_or_default()),
        address: Set(input.address.unwrap_or_default()),
        services: Set(input.services),
        linkedin_url: Set(input.linkedin_url.unwrap_or_default()),
        github_url: Set(input.github_url.unwrap_or_default()),
        twitter_url: Set(input.twitter_url.unwrap_or_default()),
        meta_title: Set(input.meta_title.unwrap_or_default()),
        meta_description: Set(input.meta_description.unwrap_or_default()),
        is_active: Set(is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let txn = db.begin().await?;
    if is_active {
        deactivate_all(&txn).await?;
    }
    let profile = new_profile.insert(&txn).await?;
    txn.commit().await?;

    Ok(profile)
}

/// Make profile `id` the single active one.
pub async fn activate_company_profile(
    db: &DatabaseConnection,
    id: i32,
) -> Result<company_profile::Model, DbErr> {
    let txn = db.begin().await?;

    let item = company_profile::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Company profile not found".to_string()))?;

    deactivate_all(&txn).await?;

    let mut active: company_profile::ActiveModel = item.into();
    active.is_active = Set(true);
    active.updated_at = Set(chrono::Utc::now());
    let profile = active.update(&txn).await?;

    txn.commit().await?;
    Ok(profile)
}

/// Featured rows whose own flag and linked portfolio are both active, in display order.
async fn active_featured_rows(
    db: &DatabaseConnection,
    id: Option<i32>,
    limit: Option<u64>,
) -> Result<Vec<(featured_developers::Model, portfolio::Model)>, DbErr> {
    let mut query = featured_developers::Entity::find()
        .find_also_related(portfolio::Entity)
        .filter(featured_developers::Column::IsActive.eq(true))
        .filter(portfolio::Column::IsActive.eq(true));
    if let Some(id) = id {
        query = query.filter(featured_developers::Column::Id.eq(id));
    }
    let mut query = query
        .order_by_asc(featured_developers::Column::DisplayOrder)
        .order_by_desc(featured_developers::Column::FeaturedSince)
        .order_by_asc(featured_developers::Column::Id);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }

    let rows = query.all(db).await?;
    Ok(rows
        .into_iter()
        .filter_map(|(featured, portfolio)| portfolio.map(|p| (featured, p)))
        .collect())
}

/// Featured developers with a carousel view of each portfolio.
pub async fn list_featured_developers(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<FeaturedDeveloperSummary>, DbErr> {
    let (featured, portfolios): (Vec<_>, Vec<_>) =
        active_featured_rows(db, None, limit).await?.into_iter().unzip();
    let carousels = load_carousels(db, portfolios).await?;

    Ok(featured
        .into_iter()
        .zip(carousels)
        .map(|(m, carousel)| FeaturedDeveloperResponse::new(m, carousel))
        .collect())
}

/// One featured developer with the full portfolio page nested in.
pub async fn get_featured_developer_detail(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<FeaturedDeveloperDetail>, DbErr> {
    let Some((featured, portfolio)) = active_featured_rows(db, Some(id), None).await?.pop()
    else {
        return Ok(None);
    };

    let detail = load_detail(db, portfolio).await?;
    Ok(Some(FeaturedDeveloperResponse::new(featured, detail)))
}

/// Promote a portfolio onto the company homepage.
pub async fn feature_developer(
    db: &DatabaseConnection,
    portfolio_id: i32,
    display_order: i32,
) -> Result<featured_developers::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_featured = featured_developers::ActiveModel {
        portfolio_id: Set(portfolio_id),
        display_order: Set(display_order),
        is_active: Set(true),
        featured_since: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_featured.insert(db).await
}

/// Toggle whether a featured row is shown.
pub async fn set_featured_active(
    db: &DatabaseConnection,
    id: i32,
    is_active: bool,
) -> Result<u64, DbErr> {
    let result = featured_developers::Entity::update_many()
        .col_expr(featured_developers::Column::IsActive, Expr::value(is_active))
        .col_expr(
            featured_developers::Column::UpdatedAt,
            Expr::value(chrono::Utc::now()),
        )
        .filter(featured_developers::Column::Id.eq(id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
