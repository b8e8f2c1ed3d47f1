use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::projects as projects_db;
use crate::error::ApiError;
use crate::handlers::resolve_portfolio;

/// GET /api/{username}/projects/
pub async fn get_projects(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let portfolio = resolve_portfolio(db.get_ref(), &path).await?;
    let items = projects_db::list_projects(db.get_ref(), portfolio.id, false).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/{username}/projects/featured/
pub async fn get_featured_projects(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let portfolio = resolve_portfolio(db.get_ref(), &path).await?;
    let items = projects_db::list_projects(db.get_ref(), portfolio.id, true).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/{username}/projects/{id}/
pub async fn get_project(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (username, id) = path.into_inner();
    let portfolio = resolve_portfolio(db.get_ref(), &username).await?;

    match projects_db::get_project(db.get_ref(), portfolio.id, id).await? {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Err(ApiError::not_found(format!("Project {id} not found"))),
    }
}
