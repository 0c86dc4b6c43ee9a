use std::sync::Arc;

use tracing::info;

use crate::config::CacheConfig;
use crate::errors::{Result, ShortenerError};

pub mod object_cache;
pub mod policy;
pub mod traits;

pub use object_cache::moka::MokaObjectCache;
pub use object_cache::null::NullObjectCache;
pub use object_cache::redis::RedisObjectCache;
pub use policy::UrlCache;
pub use traits::ObjectCache;

pub struct CacheFactory;

impl CacheFactory {
    /// 按 `cache.type` 创建缓存后端
    pub async fn create(config: &CacheConfig) -> Result<Arc<dyn ObjectCache>> {
        let cache: Arc<dyn ObjectCache> = match config.cache_type.to_lowercase().as_str() {
            "redis" => Arc::new(RedisObjectCache::new(&config.redis).await?),
            "memory" => Arc::new(MokaObjectCache::new(config.memory.max_capacity)),
            "null" | "none" => Arc::new(NullObjectCache),
            other => {
                return Err(ShortenerError::validation(format!(
                    "Unknown cache type '{}'. Supported: redis, memory, null",
                    other
                )));
            }
        };

        info!(
            "Cache initialized: {} (TTL {}s)",
            cache.backend_name(),
            config.default_ttl
        );
        Ok(cache)
    }

    /// 创建带缓存旁路策略的 `UrlCache`
    pub async fn create_url_cache(config: &CacheConfig) -> Result<UrlCache> {
        let backend = Self::create(config).await?;
        Ok(UrlCache::new(backend, config.ttl()))
    }
}
