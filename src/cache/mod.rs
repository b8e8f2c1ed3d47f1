use redis::{aio::ConnectionManager, Client, RedisError};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::CacheConfig;

/// Read-through JSON cache for public projections.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
    pub config: CacheConfig,
}

impl RedisCache {
    pub async fn new(redis_url: &str, config: CacheConfig) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection, config })
    }

    /// Get a value from cache
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> redis::RedisResult<Option<T>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        match value {
            Some(v) => {
                let deserialized = serde_json::from_str(&v).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Deserialization error",
                        e.to_string(),
                    ))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// Set a value with a TTL
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> redis::RedisResult<()> {
        let serialized = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        redis::cmd("SET")
            .arg(key)
            .arg(serialized)
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async(&mut self.connection.clone())
            .await
    }
}

/// Cache key generators
pub mod keys {
    use chrono::{DateTime, Utc};

    /// Keyed on the row's `updated_at` so any write to the portfolio row
    /// orphans the previous entry.
    pub fn portfolio(username: &str, updated_at: DateTime<Utc>) -> String {
        format!("portfolio:{}:{}", username, updated_at.timestamp_micros())
    }

    pub fn company_profile() -> String {
        "company:profile".to_string()
    }
}

/// Wrapper type for Actix-web app data
pub type CacheData = Arc<RedisCache>;

#[cfg(test)]
mod tests {
    use super::keys;
    use chrono::{TimeZone, Utc};

    #[test]
    fn keys_are_namespaced() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(keys::portfolio("ada", at), "portfolio:ada:1700000000000000");
        assert_eq!(keys::company_profile(), "company:profile");
    }

    #[test]
    fn portfolio_key_changes_with_updated_at() {
        let before = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let after = Utc.timestamp_opt(1_700_000_000, 1_000).unwrap();
        assert_ne!(keys::portfolio("ada", before), keys::portfolio("ada", after));
    }
}
