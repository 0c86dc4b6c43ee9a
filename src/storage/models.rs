use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::serde_helpers::double_option;

/// 当前时间，截断到微秒
///
/// 各数据库后端最多保存微秒精度，截断后缓存中的副本与存储中的记录完全一致。
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: Uuid,
    pub short_path: String,
    pub destination: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// 新建记录所需字段（short_path 已确定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub short_path: String,
    pub destination: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewUrl {
    pub fn new(short_path: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            short_path: short_path.into(),
            destination: destination.into(),
            title: None,
            description: None,
            image_url: None,
            expires_at: None,
        }
    }
}

/// 部分更新
///
/// 外层 `None` 表示字段未出现（保持不变）；可清空字段的 `Some(None)` 表示显式置空。
/// `short_path` 和 `destination` 不可为空，只有“不变”和“设为新值”两种状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UrlPatch {
    #[serde(default)]
    pub short_path: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

impl UrlPatch {
    pub fn is_empty(&self) -> bool {
        self.short_path.is_none()
            && self.destination.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.expires_at.is_none()
    }

    /// Merges the present fields into `record`, refreshing `updated_at`.
    pub fn apply_to(&self, record: &mut UrlRecord, now: DateTime<Utc>) {
        if let Some(short_path) = &self.short_path {
            record.short_path = short_path.clone();
        }
        if let Some(destination) = &self.destination {
            record.destination = destination.clone();
        }
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            record.image_url = image_url.clone();
        }
        if let Some(expires_at) = self.expires_at {
            record.expires_at = expires_at.map(|t| t.trunc_subsecs(6));
        }
        record.updated_at = now;
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPage {
    pub records: Vec<UrlRecord>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_record() -> UrlRecord {
        let now = now_micros();
        UrlRecord {
            id: Uuid::new_v4(),
            short_path: "abc123".to_string(),
            destination: "https://example.com".to_string(),
            title: Some("Example".to_string()),
            description: None,
            image_url: None,
            expires_at: Some(now + Duration::days(1)),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_expired_at() {
        let mut record = sample_record();
        let now = Utc::now();
        assert!(!record.is_expired_at(now));

        record.expires_at = Some(now - Duration::seconds(1));
        assert!(record.is_expired_at(now));

        record.expires_at = None;
        assert!(!record.is_expired_at(now));
    }

    #[test]
    fn test_now_micros_has_no_nanos() {
        let now = now_micros();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_patch_title_only_leaves_other_fields() {
        let mut record = sample_record();
        let before = record.clone();
        let later = before.updated_at + Duration::seconds(5);

        let patch = UrlPatch {
            title: Some(Some("New".to_string())),
            ..Default::default()
        };
        patch.apply_to(&mut record, later);

        assert_eq!(record.title.as_deref(), Some("New"));
        assert_eq!(record.destination, before.destination);
        assert_eq!(record.short_path, before.short_path);
        assert_eq!(record.expires_at, before.expires_at);
        assert_eq!(record.created_at, before.created_at);
        assert_eq!(record.updated_at, later);
    }

    #[test]
    fn test_patch_null_clears_and_absent_keeps() {
        let mut record = sample_record();

        let keep: UrlPatch = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        keep.apply_to(&mut record, now_micros());
        assert!(record.expires_at.is_some());

        let clear: UrlPatch = serde_json::from_str(r#"{"expires_at":null}"#).unwrap();
        assert_eq!(clear.expires_at, Some(None));
        clear.apply_to(&mut record, now_micros());
        assert!(record.expires_at.is_none());
        assert_eq!(record.title.as_deref(), Some("x"));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(UrlPatch::default().is_empty());
        let patch: UrlPatch = serde_json::from_str(r#"{"image_url":null}"#).unwrap();
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: UrlRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
