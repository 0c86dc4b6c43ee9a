//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::debug;
use uuid::Uuid;

use super::converters::model_to_record;
use super::{COUNT_CACHE_KEY, SeaOrmStorage};
use crate::errors::{Result, ShortenerError};
use crate::storage::models::now_micros;
use crate::storage::{UrlPage, UrlRecord};

use migration::entities::url;

impl SeaOrmStorage {
    pub(super) async fn find_by_id(&self, id: Uuid) -> Result<UrlRecord> {
        url::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(model_to_record)
            .ok_or_else(|| ShortenerError::not_found(format!("URL not found: {}", id)))
    }

    /// 按短路径查询未过期的记录
    pub(super) async fn find_active_by_short_path(&self, short_path: &str) -> Result<UrlRecord> {
        let now = now_micros();

        let model = url::Entity::find()
            .filter(url::Column::ShortPath.eq(short_path))
            .filter(
                Condition::any()
                    .add(url::Column::ExpiresAt.is_null())
                    .add(url::Column::ExpiresAt.gt(now)),
            )
            .one(&self.db)
            .await?;

        model
            .map(model_to_record)
            .ok_or_else(|| ShortenerError::not_found(format!("Short path not found: {}", short_path)))
    }

    pub(super) async fn exists_short_path(&self, short_path: &str) -> Result<bool> {
        let count = url::Entity::find()
            .filter(url::Column::ShortPath.eq(short_path))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// 分页加载（created_at 倒序，id 作为次级排序保证稳定）
    pub(super) async fn load_paginated(&self, page: u64, limit: u64) -> Result<UrlPage> {
        let page = page.max(1);
        let limit = limit.max(1);

        let total = self.count_urls().await?;

        // 偏移量 (page-1)*limit 超出 i64 时不可能有数据，且分页器内部的乘法会溢出
        let offset_in_range = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !offset_in_range {
            debug!("Page {} (limit {}) is beyond any offset", page, limit);
            return Ok(UrlPage {
                records: Vec::new(),
                total,
            });
        }

        let paginator = url::Entity::find()
            .order_by_desc(url::Column::CreatedAt)
            .order_by_desc(url::Column::Id)
            .paginate(&self.db, limit);

        let models = paginator.fetch_page(page - 1).await?;
        let records = models.into_iter().map(model_to_record).collect();

        Ok(UrlPage { records, total })
    }

    /// 总数（带 COUNT 缓存）
    pub(super) async fn count_urls(&self) -> Result<u64> {
        if let Some(cached) = self.count_cache.get(COUNT_CACHE_KEY) {
            debug!("count cache hit: value={}", cached);
            return Ok(cached);
        }

        let total = url::Entity::find().count(&self.db).await?;
        self.count_cache.insert(COUNT_CACHE_KEY.to_string(), total);
        debug!("count cache miss: value={}", total);
        Ok(total)
    }
}
