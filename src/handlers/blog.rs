use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::blog as blog_db;
use crate::error::ApiError;
use crate::handlers::resolve_portfolio;
use crate::models::PaginationQuery;
use crate::models::blog_posts::{BlogPostResponse, BlogPostSummary};

/// GET /api/{username}/blog/: published posts, newest first, paginated.
pub async fn get_posts(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let portfolio = resolve_portfolio(db.get_ref(), &path).await?;
    let posts = blog_db::list_published(db.get_ref(), portfolio.id, false, Some(&*query)).await?;
    let response: Vec<BlogPostSummary> = posts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/{username}/blog/featured/
pub async fn get_featured_posts(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let portfolio = resolve_portfolio(db.get_ref(), &path).await?;
    let posts = blog_db::list_published(db.get_ref(), portfolio.id, true, None).await?;
    let response: Vec<BlogPostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/{username}/blog/{id}/: counts as a view.
pub async fn get_post(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (username, id) = path.into_inner();
    let portfolio = resolve_portfolio(db.get_ref(), &username).await?;

    match blog_db::view_published_post(db.get_ref(), portfolio.id, id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(BlogPostResponse::from(post))),
        None => Err(ApiError::not_found(format!("Blog post {id} not found"))),
    }
}
