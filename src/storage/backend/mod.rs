//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use std::time::Duration;

use async_trait::async_trait;
use moka::sync::Cache;
use sea_orm::DatabaseConnection;
use tracing::warn;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::errors::{Result, ShortenerError};
use crate::storage::models::{NewUrl, UrlPage, UrlPatch, UrlRecord};
use crate::storage::traits::UrlStore;

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_record, record_to_active_model};

const COUNT_CACHE_KEY: &str = "count:all";

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(ShortenerError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    /// 分页 COUNT 缓存（TTL 30秒）
    count_cache: Cache<String, u64>,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_url = config.database_url.trim();
        if database_url.is_empty() {
            return Err(ShortenerError::database_config("database_url 未设置"));
        }

        let backend_name = infer_backend_from_url(database_url)?;

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config).await?
        } else {
            connect_generic(database_url, &backend_name, config).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name,
            count_cache: Cache::builder()
                .time_to_live(Duration::from_secs(30))
                .max_capacity(16)
                .build(),
        };

        // 运行迁移
        run_migrations(&storage.db).await?;

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// 清除分页 COUNT 缓存（数据变更时调用）
    pub fn invalidate_count_cache(&self) {
        self.count_cache.invalidate_all();
    }
}

#[async_trait]
impl UrlStore for SeaOrmStorage {
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord> {
        self.insert_url(new_url).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<UrlRecord> {
        self.find_by_id(id).await
    }

    async fn get_by_short_path(&self, short_path: &str) -> Result<UrlRecord> {
        self.find_active_by_short_path(short_path).await
    }

    async fn short_path_exists(&self, short_path: &str) -> Result<bool> {
        self.exists_short_path(short_path).await
    }

    async fn list(&self, page: u64, limit: u64) -> Result<UrlPage> {
        self.load_paginated(page, limit).await
    }

    async fn update_with_previous(
        &self,
        id: Uuid,
        patch: UrlPatch,
    ) -> Result<(UrlRecord, UrlRecord)> {
        self.update_url(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.remove_url(id).await
    }

    async fn count(&self) -> Result<u64> {
        self.count_urls().await
    }

    async fn ping(&self) -> Result<()> {
        self.db.ping().await.map_err(|e| {
            ShortenerError::database_connection(format!("数据库连接检查失败: {}", e))
        })
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(
            infer_backend_from_url("sqlite://data.db?mode=rwc").unwrap(),
            "sqlite"
        );
        assert_eq!(infer_backend_from_url("sqlite::memory:").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("links.db").unwrap(), "sqlite");
        assert_eq!(
            infer_backend_from_url("mysql://u:p@localhost/db").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("mariadb://u:p@localhost/db").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("postgresql://u:p@localhost/db").unwrap(),
            "postgres"
        );
    }

    #[test]
    fn test_infer_backend_unknown_scheme() {
        let err = infer_backend_from_url("mongodb://localhost").unwrap_err();
        assert!(matches!(err, ShortenerError::DatabaseConfig(_)));
    }
}
