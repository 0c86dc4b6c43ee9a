//! Server mode
//!
//! Builds the shared dependencies once and starts the actix HTTP server.
//! Ctrl+C / SIGTERM are handled by actix's own signal handling.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api;
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// worker 数量上限
const MAX_WORKERS: usize = 32;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: Arc<StaticConfig>) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {:#}", e);
            e
        })?;

    let service = startup.service.clone();
    let config = startup.config.clone();

    let cpu_count = config.server.cpu_count.clamp(1, MAX_WORKERS);
    warn!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::PayloadConfig::new(1024 * 1024))
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add(("Keep-Alive", "timeout=30, max=1000")),
            )
            .configure(api::configure)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    info!("Server stopped");
    Ok(())
}
