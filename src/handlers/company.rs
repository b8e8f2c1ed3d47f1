use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::cache::{CacheData, keys};
use crate::db::company as company_db;
use crate::error::ApiError;
use crate::models::company_profile::CompanyProfileResponse;
use crate::models::featured_developers::BEST_DEVELOPERS_LIMIT;

/// GET /api/company/profile/: the active company profile.
///
/// `/profile/{id}/` is served by the same handler and ignores the id.
pub async fn get_profile(
    db: web::Data<DatabaseConnection>,
    cache: Option<web::Data<CacheData>>,
) -> Result<HttpResponse, ApiError> {
    let cache_key = keys::company_profile();

    if let Some(cache) = &cache {
        match cache.get::<CompanyProfileResponse>(&cache_key).await {
            Ok(Some(cached)) => return Ok(HttpResponse::Ok().json(cached)),
            Ok(None) => {}
            Err(e) => tracing::warn!("Cache error: {}", e),
        }
    }

    let profile = company_db::get_active_profile(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("No active company profile found."))?;
    let response = CompanyProfileResponse::from(profile);

    if let Some(cache) = &cache {
        if let Err(e) = cache
            .set(&cache_key, &response, cache.config.company_ttl)
            .await
        {
            tracing::warn!("Cache error: {}", e);
        }
    }

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/company/featured-developers/
pub async fn get_featured_developers(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let items = company_db::list_featured_developers(db.get_ref(), None).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/company/featured-developers/best/: capped homepage strip.
pub async fn get_best_developers(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let items =
        company_db::list_featured_developers(db.get_ref(), Some(BEST_DEVELOPERS_LIMIT)).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/company/featured-developers/{id}/
pub async fn get_featured_developer(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match company_db::get_featured_developer_detail(db.get_ref(), id).await? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(ApiError::not_found(format!("Featured developer {id} not found"))),
    }
}
