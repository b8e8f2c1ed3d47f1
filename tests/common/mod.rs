//! Shared fixtures: a migrated in-memory SQLite database and a few seed helpers.

#![allow(dead_code)]

use devfolio_backend::db::{portfolio as portfolio_db, users as users_db};
use devfolio_backend::models::portfolio::{self, CreatePortfolio};
use devfolio_backend::models::users::CreateUser;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Each in-memory SQLite connection is its own database, so the pool is pinned to one.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite");
    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");
    db
}

/// Create an owner account and its portfolio under `username`.
pub async fn seed_portfolio(
    db: &DatabaseConnection,
    username: &str,
    is_active: bool,
) -> portfolio::Model {
    let owner = users_db::insert_user(
        db,
        CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
        },
    )
    .await
    .expect("failed to insert user");

    portfolio_db::create_portfolio(
        db,
        &owner,
        CreatePortfolio {
            name: Some(format!("{username} portfolio")),
            tagline: Some("Full-stack developer".to_string()),
            is_active: Some(is_active),
            ..Default::default()
        },
    )
    .await
    .expect("failed to create portfolio")
}
