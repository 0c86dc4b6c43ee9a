use std::time::Duration;

use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::UrlRecord;

/// 对象缓存后端：按 key 保存序列化的 `UrlRecord`
///
/// 缓存中的值不具有权威性，随时可能过期或缺失。
/// 错误由调用方（`UrlCache`）记录并吞掉，不影响请求结果。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<UrlRecord>>;

    /// 写入或覆盖，`ttl` 作用于本次写入
    async fn insert(&self, key: &str, value: UrlRecord, ttl: Duration) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;

    async fn ping(&self) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}
