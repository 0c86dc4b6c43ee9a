use async_trait::async_trait;
use uuid::Uuid;

use super::models::{NewUrl, UrlPage, UrlPatch, UrlRecord};
use crate::errors::Result;

/// 记录存储契约
///
/// 存储是唯一的数据来源。short_path 的唯一性由存储保证，
/// 冲突以 `ShortenerError::Conflict` 返回，不存在以 `ShortenerError::NotFound` 返回。
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// 分配 id 和时间戳后写入
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord>;

    /// 按 id 读取，已过期的记录同样返回
    async fn get_by_id(&self, id: Uuid) -> Result<UrlRecord>;

    /// 按短路径读取，已过期的记录视为不存在
    async fn get_by_short_path(&self, short_path: &str) -> Result<UrlRecord>;

    /// 短路径是否已被占用（包括已过期的记录）
    async fn short_path_exists(&self, short_path: &str) -> Result<bool>;

    /// 按创建时间倒序分页，page 从 1 开始
    async fn list(&self, page: u64, limit: u64) -> Result<UrlPage>;

    async fn update(&self, id: Uuid, patch: UrlPatch) -> Result<UrlRecord> {
        let (_, current) = self.update_with_previous(id, patch).await?;
        Ok(current)
    }

    /// 部分更新，同时返回合并前的记录（用于清理旧短路径的缓存）
    async fn update_with_previous(
        &self,
        id: Uuid,
        patch: UrlPatch,
    ) -> Result<(UrlRecord, UrlRecord)>;

    async fn delete(&self, id: Uuid) -> Result<()>;

    async fn count(&self) -> Result<u64>;

    async fn ping(&self) -> Result<()>;

    fn backend_name(&self) -> &str;
}
