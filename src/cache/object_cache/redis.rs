use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tracing::{debug, error, trace};

use crate::cache::ObjectCache;
use crate::config::RedisConfig;
use crate::errors::{Result, ShortenerError};
use crate::storage::UrlRecord;

/// Redis 缓存（`type = "redis"`），值为 JSON，使用 SET EX 写入
pub struct RedisObjectCache {
    /// ConnectionManager 断线后自动重连，clone 开销很小
    manager: ConnectionManager,
    key_prefix: String,
}

impl RedisObjectCache {
    /// 建立连接并 PING 一次，连接失败时返回错误
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str()).map_err(|e| {
            ShortenerError::cache_connection(format!(
                "Invalid Redis URL '{}': {}",
                config.url, e
            ))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            error!(
                "Failed to connect to Redis: {}. Check Redis server status and URL: {}",
                e, config.url
            );
            ShortenerError::cache_connection(format!("Redis connection failed: {}", e))
        })?;

        let cache = Self {
            manager,
            key_prefix: config.key_prefix.clone(),
        };
        cache.ping().await?;

        debug!(
            "RedisObjectCache created with prefix: '{}'",
            cache.key_prefix
        );
        Ok(cache)
    }

    fn make_key(&self, key: &str) -> String {
        prefixed_key(&self.key_prefix, key)
    }
}

fn prefixed_key(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

/// SET EX 不接受 0 秒
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get(&self, key: &str) -> Result<Option<UrlRecord>> {
        let mut conn = self.manager.clone();
        let data: Option<String> = conn.get(self.make_key(key)).await?;

        match data {
            Some(data) => {
                let record = serde_json::from_str(&data)?;
                trace!("Successfully retrieved key: {}", key);
                Ok(Some(record))
            }
            None => {
                trace!("Key not found in cache: {}", key);
                Ok(None)
            }
        }
    }

    async fn insert(&self, key: &str, value: UrlRecord, ttl: Duration) -> Result<()> {
        let serialized = serde_json::to_string(&value)?;
        let mut conn = self.manager.clone();
        conn.set_ex::<_, _, ()>(self.make_key(key), serialized, ttl_seconds(ttl))
            .await?;
        trace!("Successfully inserted key into cache: {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.manager.clone();
        let deleted: i64 = conn.del(self.make_key(key)).await?;
        trace!("Removed key '{}' from cache ({} deleted)", key, deleted);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.manager.clone();
        let response: String = redis::cmd("PING").query_async(&mut conn).await?;
        trace!("Redis ping: {}", response);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_key() {
        assert_eq!(
            prefixed_key("url_shortener:", "by-path:abc"),
            "url_shortener:by-path:abc"
        );
        assert_eq!(prefixed_key("", "by-id:1"), "by-id:1");
    }

    #[test]
    fn test_ttl_seconds_never_zero() {
        assert_eq!(ttl_seconds(Duration::from_secs(3600)), 3600);
        assert_eq!(ttl_seconds(Duration::from_millis(10)), 1);
        assert_eq!(ttl_seconds(Duration::ZERO), 1);
    }
}
