use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use devfolio_backend::cache::RedisCache;
use devfolio_backend::config::AppConfig;
use devfolio_backend::create_pool;
use devfolio_backend::error::json_error_handler;
use devfolio_backend::handlers;
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let db = create_pool(&config).await.map_err(io::Error::other)?;
    if config.run_migrations {
        Migrator::up(&db, None).await.map_err(io::Error::other)?;
        tracing::info!("Database migrations applied");
    }
    let db_data = web::Data::new(db);

    // Redis is optional; without it every request reads from the database.
    let redis_data = match &config.redis_url {
        Some(url) => match RedisCache::new(url, config.cache.clone()).await {
            Ok(cache) => {
                tracing::info!("Connected to Redis");
                Some(web::Data::new(Arc::new(cache)))
            }
            Err(e) => {
                tracing::warn!("Redis unavailable, caching disabled: {}", e);
                None
            }
        },
        None => None,
    };

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    let cors_origin = config.cors_allowed_origin.clone();

    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default().allowed_origin(origin),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600);

        let mut app = App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(db_data.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));
        if let Some(redis_data) = &redis_data {
            app = app.app_data(redis_data.clone());
        }

        app.service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
