use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::{debug, error, instrument};
use url::Url;

use crate::errors::ShortenerError;
use crate::services::UrlService;

/// GET|HEAD /{short_path}
///
/// 307 跳转到目标地址；不存在或已过期返回 404。
#[instrument(name = "redirect", skip_all, fields(short_path = %path.as_str()))]
pub async fn handle_redirect(
    path: web::Path<String>,
    service: web::Data<Arc<UrlService>>,
) -> HttpResponse {
    match service.resolve_redirect(&path).await {
        Ok(record) => {
            debug!("Redirecting '{}' -> '{}'", record.short_path, record.destination);
            HttpResponse::TemporaryRedirect()
                .insert_header(("Location", location_value(&record.destination)))
                .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
                .finish()
        }
        Err(ShortenerError::NotFound(_)) => not_found_response(),
        Err(e) => {
            error!("Redirect lookup failed for '{}': {}", path.as_str(), e);
            HttpResponse::build(e.http_status())
                .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                .body(e.error_type())
        }
    }
}

/// Location 头只能携带可见 ASCII，含非 ASCII 字符的地址改用解析后的百分号编码形式
fn location_value(destination: &str) -> String {
    if destination.is_ascii() {
        return destination.to_string();
    }
    Url::parse(destination)
        .map(String::from)
        .unwrap_or_else(|_| destination.to_string())
}

#[inline]
fn not_found_response() -> HttpResponse {
    HttpResponse::build(StatusCode::NOT_FOUND)
        .insert_header(("Content-Type", "text/plain; charset=utf-8"))
        .insert_header(("Cache-Control", "public, max-age=60"))
        .body("Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_value() {
        assert_eq!(
            location_value("https://example.com/a?b=1"),
            "https://example.com/a?b=1"
        );
        assert_eq!(
            location_value("https://example.com/路径"),
            "https://example.com/%E8%B7%AF%E5%BE%84"
        );
        assert_eq!(location_value("https://例子.com/"), "https://xn--fsqu00a.com/");
    }
}
