use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{info, instrument};

use crate::services::UrlService;

/// GET /api/health
///
/// 存储不可用时返回 503；仅缓存不可用时状态为 degraded，仍返回 200。
#[instrument(name = "health_check", skip_all)]
pub async fn health_check(service: web::Data<Arc<UrlService>>) -> impl Responder {
    let report = service.health_check().await;

    let status = if report.is_serving() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    info!(
        "Health check completed: storage={:?}, cache={:?}",
        report.storage.status, report.cache.status
    );

    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(report)
}
