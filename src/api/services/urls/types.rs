//! URL API 类型定义

use serde::{Deserialize, Serialize};

use crate::services::UrlListPage;
use crate::storage::UrlRecord;
use crate::utils::serde_helpers::lenient_i64;

/// 统一响应信封
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 非数字的 page/limit 按未提供处理，回落到默认分页
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ListUrlsQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UrlListResponse {
    pub urls: Vec<UrlRecord>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<UrlListPage> for UrlListResponse {
    fn from(page: UrlListPage) -> Self {
        Self {
            urls: page.urls,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}
