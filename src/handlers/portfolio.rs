use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::cache::{CacheData, keys};
use crate::db::portfolio as portfolio_db;
use crate::error::ApiError;
use crate::handlers::resolve_portfolio;
use crate::models::PaginationQuery;
use crate::models::portfolio::{PortfolioDetail, PortfolioSummary};

/// GET /api/portfolios/: active portfolio summaries, paginated.
pub async fn get_portfolios(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = portfolio_db::list_active_portfolios(db.get_ref(), &query).await?;
    let response: Vec<PortfolioSummary> = items.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/portfolios/{username}/: full nested portfolio page.
///
/// The active lookup always hits the database; only the nested assembly is cached.
pub async fn get_portfolio(
    db: web::Data<DatabaseConnection>,
    cache: Option<web::Data<CacheData>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    let portfolio = resolve_portfolio(db.get_ref(), &username).await?;
    let cache_key = keys::portfolio(&portfolio.username, portfolio.updated_at);

    if let Some(cache) = &cache {
        match cache.get::<PortfolioDetail>(&cache_key).await {
            Ok(Some(cached)) => return Ok(HttpResponse::Ok().json(cached)),
            Ok(None) => {}
            // Cache error - fallback to database
            Err(e) => tracing::warn!("Cache error: {}", e),
        }
    }

    let detail = portfolio_db::load_detail(db.get_ref(), portfolio).await?;

    if let Some(cache) = &cache {
        if let Err(e) = cache
            .set(&cache_key, &detail, cache.config.portfolio_ttl)
            .await
        {
            tracing::warn!("Cache error: {}", e);
        }
    }

    Ok(HttpResponse::Ok().json(detail))
}
