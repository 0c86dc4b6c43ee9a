use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::cache::ObjectCache;
use crate::errors::Result;
use crate::storage::UrlRecord;

/// 不缓存任何内容（`type = "null"`），每次读取都回源
pub struct NullObjectCache;

#[async_trait]
impl ObjectCache for NullObjectCache {
    async fn get(&self, key: &str) -> Result<Option<UrlRecord>> {
        trace!("NullObjectCache.get called for key: {}", key);
        Ok(None)
    }

    async fn insert(&self, key: &str, _: UrlRecord, _ttl: Duration) -> Result<()> {
        trace!("NullObjectCache.insert called for key: {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        trace!("NullObjectCache.remove called for key: {}", key);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::now_micros;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_null_cache_always_misses() {
        let cache = NullObjectCache;
        let now = now_micros();
        let record = UrlRecord {
            id: Uuid::new_v4(),
            short_path: "test".to_string(),
            destination: "https://example.com".to_string(),
            title: None,
            description: None,
            image_url: None,
            expires_at: None,
            created_at: now,
            updated_at: now,
        };

        // insert 是空操作
        cache
            .insert("test", record, Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(cache.get("test").await.unwrap(), None);
        cache.remove("test").await.unwrap();
        cache.ping().await.unwrap();
    }
}
