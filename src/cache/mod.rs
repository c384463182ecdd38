use redis::{Client, RedisError, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;

/// Redis-backed cache for the dashboard aggregates. Aggregation inputs span
/// every table, so mutations invalidate by prefix instead of tracking
/// individual keys.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn new(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    /// Get a cached value, deserialized from JSON.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> redis::RedisResult<Option<T>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        match value {
            Some(v) => {
                let deserialized = serde_json::from_str(&v).map_err(|e| {
                    RedisError::from((
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

    /// Cache a value as JSON with a TTL.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> redis::RedisResult<()> {
        let serialized = serde_json::to_string(value).map_err(|e| {
            RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        redis::cmd("SET")
            .arg(key)
            .arg(serialized)
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Drop every key under a prefix (e.g. all dashboard views after a
    /// report mutation).
    pub async fn invalidate_prefix(&self, prefix: &str) -> redis::RedisResult<()> {
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(format!("{prefix}*"))
            .query_async(&mut self.connection.clone())
            .await?;

        if !keys.is_empty() {
            let _: () = redis::cmd("DEL")
                .arg(&keys)
                .query_async(&mut self.connection.clone())
                .await?;
        }

        Ok(())
    }
}

/// Cache key generators
pub mod keys {
    pub const DASHBOARD_PREFIX: &str = "dashboard:";

    pub fn summary() -> String {
        format!("{DASHBOARD_PREFIX}summary")
    }

    pub fn daily_trends(days: i64) -> String {
        format!("{DASHBOARD_PREFIX}trends:daily:{days}")
    }

    pub fn monthly_trends(months: u32) -> String {
        format!("{DASHBOARD_PREFIX}trends:monthly:{months}")
    }

    pub fn completion(days: i64) -> String {
        format!("{DASHBOARD_PREFIX}completion:{days}")
    }

    pub fn leaderboard(days: i64) -> String {
        format!("{DASHBOARD_PREFIX}leaderboard:{days}")
    }

    pub fn finances() -> String {
        format!("{DASHBOARD_PREFIX}finances")
    }
}

/// TTLs for the cached dashboard views.
#[derive(Clone, Copy)]
pub struct CacheConfig {
    pub summary_ttl: Duration,
    pub trends_ttl: Duration,
    pub finances_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            summary_ttl: Duration::from_secs(60),
            trends_ttl: Duration::from_secs(300),
            finances_ttl: Duration::from_secs(120),
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            summary_ttl: parse_duration_secs("CACHE_TTL_SUMMARY", defaults.summary_ttl),
            trends_ttl: parse_duration_secs("CACHE_TTL_TRENDS", defaults.trends_ttl),
            finances_ttl: parse_duration_secs("CACHE_TTL_FINANCES", defaults.finances_ttl),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: Duration) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

/// Wrapper type for Actix-web app data
pub type CacheData = Arc<RedisCache>;
