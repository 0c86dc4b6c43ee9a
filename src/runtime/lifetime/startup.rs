use crate::cache::CacheFactory;
use crate::config::StaticConfig;
use crate::services::UrlService;
use crate::storage::{SeaOrmStorage, StorageFactory, UrlStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub struct StartupContext {
    pub config: Arc<StaticConfig>,
    pub storage: Arc<SeaOrmStorage>,
    pub service: Arc<UrlService>,
}

/// 准备服务器启动的上下文
/// 存储、缓存与 UrlService 只构建一次，之后以 Arc 显式传入各 worker
pub async fn prepare_server_startup(config: Arc<StaticConfig>) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let cache = CacheFactory::create_url_cache(&config.cache)
        .await
        .context("Failed to create cache backend")?;
    info!(
        "Using cache backend: {} (ttl {}s)",
        cache.backend_name(),
        cache.ttl().as_secs()
    );

    let store: Arc<dyn UrlStore> = storage.clone();
    let service = Arc::new(UrlService::from_config(store, cache, &config));

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        config,
        storage,
        service,
    })
}
