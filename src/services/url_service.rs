//! URL management service
//!
//! Orchestrates validation, short path allocation, the record store and the
//! cache-aside layer for every URL operation exposed over HTTP.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::health::{HealthReport, HealthService};
use super::short_path::ShortPathResolver;
use crate::cache::UrlCache;
use crate::config::StaticConfig;
use crate::errors::{Result, ShortenerError};
use crate::storage::{NewUrl, UrlPatch, UrlRecord, UrlStore};
use crate::utils::short_path::is_allowed_char;
use crate::utils::{validate_destination, validate_short_path};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

// ============ Request/Response DTOs ============

/// Request to create a new URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUrlRequest {
    /// Custom short path (optional; empty or absent means generate one)
    #[serde(default)]
    pub short_path: Option<String>,
    pub destination: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// One page of records plus the paging actually applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlListPage {
    pub urls: Vec<UrlRecord>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// page < 1 → 1，limit 不在 1..=100 → 10
pub fn normalize_paging(page: Option<i64>, limit: Option<i64>) -> (u64, u64) {
    let page = match page {
        Some(p) if p >= 1 => p as u64,
        _ => DEFAULT_PAGE,
    };
    let limit = match limit {
        Some(l) if (1..=MAX_LIMIT as i64).contains(&l) => l as u64,
        _ => DEFAULT_LIMIT,
    };
    (page, limit)
}

// ============ UrlService Implementation ============

pub struct UrlService {
    store: Arc<dyn UrlStore>,
    cache: UrlCache,
    resolver: ShortPathResolver,
    request_timeout: Duration,
}

impl UrlService {
    pub fn new(
        store: Arc<dyn UrlStore>,
        cache: UrlCache,
        resolver: ShortPathResolver,
        request_timeout: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            resolver,
            request_timeout,
        }
    }

    pub fn from_config(store: Arc<dyn UrlStore>, cache: UrlCache, config: &StaticConfig) -> Self {
        Self::new(
            store,
            cache,
            ShortPathResolver::from_config(&config.short_path),
            config.server.request_timeout(),
        )
    }

    /// 所有存储调用都带超时，超时映射为 `Timeout`
    async fn bounded<T>(&self, operation: &str, fut: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    "Store operation '{}' timed out after {:?}",
                    operation, self.request_timeout
                );
                Err(ShortenerError::timeout(format!(
                    "Store operation '{}' timed out",
                    operation
                )))
            }
        }
    }

    // ============ CRUD Operations ============

    pub async fn create_url(&self, req: CreateUrlRequest) -> Result<UrlRecord> {
        let destination = req.destination.trim().to_string();
        validate_destination(&destination)?;

        let (short_path, generated) = match req.short_path.filter(|p| !p.is_empty()) {
            Some(path) => {
                validate_short_path(&path)?;
                (path, false)
            }
            None => {
                let path = self
                    .resolver
                    .resolve(|candidate| async move {
                        self.bounded("short_path_exists", self.store.short_path_exists(&candidate))
                            .await
                    })
                    .await?;
                (path, true)
            }
        };

        let new_url = NewUrl {
            short_path,
            destination,
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            expires_at: req.expires_at,
        };

        let record = self.bounded("create", self.store.create(new_url)).await?;
        self.cache.store_both(&record).await;

        info!(
            "UrlService: created '{}' -> '{}'{}",
            record.short_path,
            record.destination,
            if generated { " (generated)" } else { "" }
        );
        Ok(record)
    }

    /// 按 id 读取，过期记录同样返回
    pub async fn get_url(&self, id: Uuid) -> Result<UrlRecord> {
        if let Some(record) = self.cache.get_by_id(id).await {
            return Ok(record);
        }

        let record = self.bounded("get_by_id", self.store.get_by_id(id)).await?;
        self.cache.store_both(&record).await;
        Ok(record)
    }

    /// 重定向查询：不存在或已过期都返回 NotFound
    pub async fn resolve_redirect(&self, short_path: &str) -> Result<UrlRecord> {
        let not_found = || ShortenerError::not_found(format!("Short path not found: {}", short_path));

        // 格式不合法的路径不可能存在，不必查询
        if short_path.is_empty() || !short_path.chars().all(is_allowed_char) {
            return Err(not_found());
        }

        if let Some(record) = self.cache.get_by_path(short_path).await {
            if record.is_expired() {
                debug!("Cached record for '{}' has expired", short_path);
                return Err(not_found());
            }
            return Ok(record);
        }

        let record = self
            .bounded("get_by_short_path", self.store.get_by_short_path(short_path))
            .await?;
        if record.is_expired() {
            return Err(not_found());
        }

        self.cache.store_both(&record).await;
        Ok(record)
    }

    pub async fn list_urls(&self, page: Option<i64>, limit: Option<i64>) -> Result<UrlListPage> {
        let (page, limit) = normalize_paging(page, limit);
        let result = self.bounded("list", self.store.list(page, limit)).await?;

        Ok(UrlListPage {
            urls: result.records,
            total: result.total,
            page,
            limit,
        })
    }

    /// 部分更新（PUT 与 PATCH 共用）
    pub async fn update_url(&self, id: Uuid, mut patch: UrlPatch) -> Result<UrlRecord> {
        if let Some(short_path) = &patch.short_path {
            validate_short_path(short_path)?;
        }
        if let Some(destination) = patch.destination.take() {
            let destination = destination.trim().to_string();
            validate_destination(&destination)?;
            patch.destination = Some(destination);
        }

        let (previous, record) = self
            .bounded("update", self.store.update_with_previous(id, patch))
            .await?;

        // 短路径被修改时清理旧的 by-path key
        if previous.short_path != record.short_path {
            self.cache.invalidate_path(&previous.short_path).await;
        }
        self.cache.store_both(&record).await;

        info!("UrlService: updated '{}' ({})", record.short_path, id);
        Ok(record)
    }

    pub async fn delete_url(&self, id: Uuid) -> Result<()> {
        // 先读出当前 short_path，用于清理缓存
        let record = self.bounded("get_by_id", self.store.get_by_id(id)).await?;
        self.bounded("delete", self.store.delete(id)).await?;
        self.cache.invalidate(id, &record.short_path).await;

        info!("UrlService: deleted '{}' ({})", record.short_path, id);
        Ok(())
    }

    pub async fn health_check(&self) -> HealthReport {
        HealthService::check(self.store.as_ref(), &self.cache).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_paging_defaults() {
        assert_eq!(normalize_paging(None, None), (1, 10));
    }

    #[test]
    fn test_normalize_paging_clamps() {
        assert_eq!(normalize_paging(Some(0), Some(0)), (1, 10));
        assert_eq!(normalize_paging(Some(-3), Some(-1)), (1, 10));
        assert_eq!(normalize_paging(Some(3), Some(101)), (3, 10));
        assert_eq!(normalize_paging(Some(2), Some(100)), (2, 100));
        assert_eq!(normalize_paging(Some(1), Some(1)), (1, 1));
    }

    #[test]
    fn test_create_request_optional_fields() {
        let req: CreateUrlRequest =
            serde_json::from_str(r#"{"destination":"https://example.com"}"#).unwrap();
        assert!(req.short_path.is_none());
        assert!(req.expires_at.is_none());

        let req: CreateUrlRequest = serde_json::from_str(
            r#"{"destination":"https://example.com","short_path":"docs2","expires_at":"2030-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.short_path.as_deref(), Some("docs2"));
        assert!(req.expires_at.is_some());
    }

    #[test]
    fn test_create_request_requires_destination() {
        assert!(serde_json::from_str::<CreateUrlRequest>(r#"{"short_path":"abc"}"#).is_err());
    }
}
