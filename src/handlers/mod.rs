pub mod blog;
pub mod company;
pub mod contact;
pub mod newsletter;
pub mod portfolio;
pub mod projects;
pub mod resources;

use actix_web::web;
use sea_orm::DatabaseConnection;

use crate::db::portfolio as portfolio_db;
use crate::error::ApiError;
use crate::models::portfolio as portfolio_model;

/// Resolve the active portfolio behind a `{username}` path segment.
pub(crate) async fn resolve_portfolio(
    db: &DatabaseConnection,
    username: &str,
) -> Result<portfolio_model::Model, ApiError> {
    portfolio_db::find_active_by_username(db, username)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Portfolio {username} not found")))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Company homepage ──
    cfg.service(
        web::scope("/company")
            .route("/profile/", web::get().to(company::get_profile))
            .route("/profile/{id}/", web::get().to(company::get_profile))
            .route(
                "/featured-developers/",
                web::get().to(company::get_featured_developers),
            )
            .route(
                "/featured-developers/best/",
                web::get().to(company::get_best_developers),
            )
            .route(
                "/featured-developers/{id}/",
                web::get().to(company::get_featured_developer),
            ),
    );

    // ── Portfolios ──
    cfg.service(
        web::scope("/portfolios")
            .route("/", web::get().to(portfolio::get_portfolios))
            .route("/{username}/", web::get().to(portfolio::get_portfolio)),
    );

    // ── Per-portfolio sections, scoped by owner username ──
    cfg.service(
        web::scope("/{username}")
            .route("/projects/", web::get().to(projects::get_projects))
            .route("/projects/featured/", web::get().to(projects::get_featured_projects))
            .route("/projects/{id}/", web::get().to(projects::get_project))
            .route("/blog/", web::get().to(blog::get_posts))
            .route("/blog/featured/", web::get().to(blog::get_featured_posts))
            .route("/blog/{id}/", web::get().to(blog::get_post))
            .route("/resources/", web::get().to(resources::get_resources))
            .route("/resources/{id}/", web::get().to(resources::get_resource))
            .route(
                "/resources/{id}/download/",
                web::post().to(resources::download_resource),
            )
            .route(
                "/newsletter/subscribe/",
                web::post().to(newsletter::subscribe),
            )
            .route("/contact/", web::post().to(contact::send_message)),
    );
}
