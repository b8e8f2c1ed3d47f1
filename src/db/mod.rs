pub mod blog;
pub mod company;
pub mod contact;
pub mod newsletter;
pub mod portfolio;
pub mod projects;
pub mod resources;
pub mod sections;
pub mod users;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::AppConfig;

/// Create a SeaORM database connection pool from the configured `DATABASE_URL`.
pub async fn create_pool(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .sqlx_logging(false);
    Database::connect(options).await
}

/// First of `base`, `base-2`, `base-3`, ... that is not in `taken`.
pub fn next_free_slug(base: &str, taken: &[String]) -> String {
    if !taken.iter().any(|s| s == base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken.iter().any(|s| s == candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::next_free_slug;

    #[test]
    fn free_slug_is_kept() {
        assert_eq!(next_free_slug("portfolio-site", &[]), "portfolio-site");
        let taken = vec!["portfolio-site-2".to_string()];
        assert_eq!(next_free_slug("portfolio-site", &taken), "portfolio-site");
    }

    #[test]
    fn taken_slug_gets_numeric_suffix() {
        let taken = vec![
            "portfolio-site".to_string(),
            "portfolio-site-2".to_string(),
            "portfolio-site-extra".to_string(),
        ];
        assert_eq!(next_free_slug("portfolio-site", &taken), "portfolio-site-3");
    }
}
