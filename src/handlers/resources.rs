use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::resources as resources_db;
use crate::error::ApiError;
use crate::handlers::resolve_portfolio;
use crate::models::resources::ResourceResponse;

/// GET /api/{username}/resources/
pub async fn get_resources(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let portfolio = resolve_portfolio(db.get_ref(), &path).await?;
    let items = resources_db::list_resources(db.get_ref(), portfolio.id).await?;
    let response: Vec<ResourceResponse> = items.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/{username}/resources/{id}/
pub async fn get_resource(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (username, id) = path.into_inner();
    let portfolio = resolve_portfolio(db.get_ref(), &username).await?;

    match resources_db::get_resource(db.get_ref(), portfolio.id, id).await? {
        Some(item) => Ok(HttpResponse::Ok().json(ResourceResponse::from(item))),
        None => Err(ApiError::not_found(format!("Resource {id} not found"))),
    }
}

/// POST /api/{username}/resources/{id}/download/: bumps the download counter only.
pub async fn download_resource(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (username, id) = path.into_inner();
    let portfolio = resolve_portfolio(db.get_ref(), &username).await?;

    if !resources_db::record_download(db.get_ref(), portfolio.id, id).await? {
        return Err(ApiError::not_found(format!("Resource {id} not found")));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "download count updated",
    })))
}
