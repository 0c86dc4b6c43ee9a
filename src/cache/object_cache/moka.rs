use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use moka::policy::Expiry;
use tracing::debug;

use crate::cache::ObjectCache;
use crate::errors::Result;
use crate::storage::UrlRecord;

#[derive(Clone)]
struct CachedRecord {
    record: UrlRecord,
    ttl: Duration,
}

/// 每个条目按写入时给定的 TTL 过期，覆盖写入会重新计时
struct PerWriteExpiry;

impl Expiry<String, CachedRecord> for PerWriteExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedRecord,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedRecord,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// 进程内缓存（`type = "memory"`）
pub struct MokaObjectCache {
    inner: Cache<String, CachedRecord>,
}

impl MokaObjectCache {
    pub fn new(max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerWriteExpiry)
            .build();

        debug!(
            "MokaObjectCache initialized with max capacity: {}",
            max_capacity
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaObjectCache {
    async fn get(&self, key: &str) -> Result<Option<UrlRecord>> {
        Ok(self.inner.get(key).await.map(|cached| cached.record))
    }

    async fn insert(&self, key: &str, value: UrlRecord, ttl: Duration) -> Result<()> {
        self.inner
            .insert(key.to_string(), CachedRecord { record: value, ttl })
            .await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.invalidate(key).await;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
