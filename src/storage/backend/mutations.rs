//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::SubsecRound;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::info;
use uuid::Uuid;

use super::SeaOrmStorage;
use super::converters::{model_to_record, record_to_active_model};
use crate::errors::{Result, ShortenerError};
use crate::storage::models::now_micros;
use crate::storage::{NewUrl, UrlPatch, UrlRecord};

use migration::entities::url;

impl SeaOrmStorage {
    pub(super) async fn insert_url(&self, new_url: NewUrl) -> Result<UrlRecord> {
        let now = now_micros();
        let record = UrlRecord {
            id: Uuid::new_v4(),
            short_path: new_url.short_path,
            destination: new_url.destination,
            title: new_url.title,
            description: new_url.description,
            image_url: new_url.image_url,
            expires_at: new_url.expires_at.map(|t| t.trunc_subsecs(6)),
            created_at: now,
            updated_at: now,
        };

        // 唯一约束冲突由 From<DbErr> 转换为 Conflict
        url::Entity::insert(record_to_active_model(&record, true))
            .exec(&self.db)
            .await?;

        self.invalidate_count_cache();
        info!("URL created: {} -> {}", record.short_path, record.destination);
        Ok(record)
    }

    /// 返回 (合并前, 合并后)
    pub(super) async fn update_url(
        &self,
        id: Uuid,
        patch: UrlPatch,
    ) -> Result<(UrlRecord, UrlRecord)> {
        let model = url::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ShortenerError::not_found(format!("URL not found: {}", id)))?;

        let previous = model_to_record(model);
        let mut record = previous.clone();
        patch.apply_to(&mut record, now_micros());

        let result = url::Entity::update_many()
            .set(record_to_active_model(&record, false))
            .filter(url::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        // 读取与更新之间被删除
        if result.rows_affected == 0 {
            return Err(ShortenerError::not_found(format!("URL not found: {}", id)));
        }

        info!("URL updated: {} ({})", record.short_path, id);
        Ok((previous, record))
    }

    pub(super) async fn remove_url(&self, id: Uuid) -> Result<()> {
        let result = url::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ShortenerError::not_found(format!("URL not found: {}", id)));
        }

        self.invalidate_count_cache();
        info!("URL deleted: {}", id);
        Ok(())
    }
}
