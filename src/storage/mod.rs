use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;
pub mod traits;

pub use backend::SeaOrmStorage;
pub use models::{NewUrl, UrlPage, UrlPatch, UrlRecord};
pub use traits::UrlStore;

pub struct StorageFactory;

impl StorageFactory {
    /// 按配置创建存储（后端类型从 URL 推断），并完成迁移
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let storage = SeaOrmStorage::new(config).await?;
        Ok(Arc::new(storage))
    }
}
