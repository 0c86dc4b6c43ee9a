//! Cache-aside policy over an `ObjectCache`
//!
//! Two key spaces mirror the two store lookups:
//! `by-path:<short_path>` and `by-id:<uuid>`. Every write goes to both, every
//! TTL is applied per write. Cache failures are logged and swallowed: reads
//! degrade to a miss, writes and deletes are skipped.

use std::sync::Arc;
use std::time::Duration;

use tracing::{trace, warn};
use uuid::Uuid;

use super::ObjectCache;
use crate::errors::Result;
use crate::storage::UrlRecord;

const PATH_PREFIX: &str = "by-path:";
const ID_PREFIX: &str = "by-id:";

pub fn path_key(short_path: &str) -> String {
    format!("{}{}", PATH_PREFIX, short_path)
}

pub fn id_key(id: Uuid) -> String {
    format!("{}{}", ID_PREFIX, id)
}

#[derive(Clone)]
pub struct UrlCache {
    backend: Arc<dyn ObjectCache>,
    ttl: Duration,
}

impl UrlCache {
    pub fn new(backend: Arc<dyn ObjectCache>, ttl: Duration) -> Self {
        Self { backend, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    pub async fn get_by_path(&self, short_path: &str) -> Option<UrlRecord> {
        let key = path_key(short_path);
        let record = self.read(&key).await?;

        // 短路径被修改后，旧 key 在 TTL 内仍然存在，不能当作命中
        if record.short_path != short_path {
            trace!("Ignoring stale cache entry: {}", key);
            return None;
        }
        Some(record)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<UrlRecord> {
        let key = id_key(id);
        self.read(&key).await.filter(|record| record.id == id)
    }

    /// 双写：按当前 short_path 和 id 覆盖两个 key
    pub async fn store_both(&self, record: &UrlRecord) {
        self.write(path_key(&record.short_path), record).await;
        self.write(id_key(record.id), record).await;
    }

    /// 仅删除 by-path key（短路径被修改时清理旧路径）
    pub async fn invalidate_path(&self, short_path: &str) {
        self.delete(path_key(short_path)).await;
    }

    /// 双删
    pub async fn invalidate(&self, id: Uuid, short_path: &str) {
        self.delete(path_key(short_path)).await;
        self.delete(id_key(id)).await;
    }

    pub async fn ping(&self) -> Result<()> {
        self.backend.ping().await
    }

    async fn read(&self, key: &str) -> Option<UrlRecord> {
        match self.backend.get(key).await {
            Ok(Some(record)) => {
                trace!("Cache hit: {}", key);
                Some(record)
            }
            Ok(None) => {
                trace!("Cache miss: {}", key);
                None
            }
            Err(e) => {
                warn!("Cache read failed for key '{}': {}", key, e);
                None
            }
        }
    }

    async fn write(&self, key: String, record: &UrlRecord) {
        if let Err(e) = self.backend.insert(&key, record.clone(), self.ttl).await {
            warn!("Cache write failed for key '{}': {}", key, e);
        }
    }

    async fn delete(&self, key: String) {
        if let Err(e) = self.backend.remove(&key).await {
            warn!("Cache delete failed for key '{}': {}", key, e);
        }
    }
}
