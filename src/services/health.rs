use std::future::Future;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, trace, warn};

use crate::cache::UrlCache;
use crate::errors::Result;
use crate::storage::UrlStore;

/// 依赖检查超时
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// 缓存不可用，服务仍可回源到存储
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct DependencyHealth {
    pub status: HealthStatus,
    pub backend: String,
    pub response_time_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub storage: DependencyHealth,
    pub cache: DependencyHealth,
}

impl HealthReport {
    pub fn is_serving(&self) -> bool {
        self.status != HealthStatus::Unhealthy
    }
}

pub struct HealthService;

impl HealthService {
    pub async fn check(store: &dyn UrlStore, cache: &UrlCache) -> HealthReport {
        trace!("Running health check");

        let storage = Self::probe(store.backend_name(), store.ping()).await;
        let cache = Self::probe(cache.backend_name(), cache.ping()).await;

        let status = match (storage.status, cache.status) {
            (HealthStatus::Healthy, HealthStatus::Healthy) => HealthStatus::Healthy,
            (HealthStatus::Healthy, _) => HealthStatus::Degraded,
            _ => HealthStatus::Unhealthy,
        };

        match status {
            HealthStatus::Healthy => {}
            HealthStatus::Degraded => warn!("Health check degraded: cache unavailable"),
            HealthStatus::Unhealthy => error!("Health check failed: storage unavailable"),
        }

        HealthReport {
            status,
            timestamp: Utc::now(),
            storage,
            cache,
        }
    }

    async fn probe(backend: &str, ping: impl Future<Output = Result<()>>) -> DependencyHealth {
        let started = Instant::now();
        let (status, error) = match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, ping).await {
            Ok(Ok(())) => (HealthStatus::Healthy, None),
            Ok(Err(e)) => (HealthStatus::Unhealthy, Some(e.to_string())),
            Err(_) => (HealthStatus::Unhealthy, Some("timeout".to_string())),
        };

        DependencyHealth {
            status,
            backend: backend.to_string(),
            response_time_ms: started.elapsed().as_millis(),
            error,
        }
    }
}
