//! URL API 帮助函数

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ShortenerError;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// 201 Created
pub fn created_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::CREATED, ErrorCode::Success, "Created", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 从 ShortenerError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_shortener(err: &ShortenerError) -> HttpResponse {
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// 统一 Result → HttpResponse 转换
///
/// 成功时返回 200 OK + JSON 数据，失败时自动映射 ShortenerError。
pub fn api_result<T: Serialize>(result: Result<T, ShortenerError>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_shortener(&e),
    }
}

/// 解析路径中的 UUID，格式错误视为校验失败
pub fn parse_url_id(raw: &str) -> Result<Uuid, ShortenerError> {
    Uuid::parse_str(raw)
        .map_err(|_| ShortenerError::validation(format!("Invalid URL id: '{}'", raw)))
}

/// 请求体解析失败时返回统一信封
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!("Rejected JSON body: {}", err);
        let response = error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            &format!("Invalid request body: {}", err),
        );
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// 查询参数解析失败时返回统一信封
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        debug!("Rejected query string: {}", err);
        let response = error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            &format!("Invalid query parameters: {}", err),
        );
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_url_id(&id.to_string()).unwrap(), id);

        let err = parse_url_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, ShortenerError::Validation(_)));
    }

    #[test]
    fn test_error_from_shortener_status() {
        let resp = error_from_shortener(&ShortenerError::conflict("taken"));
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = error_from_shortener(&ShortenerError::timeout("slow"));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_api_result_success() {
        let resp = api_result::<u32>(Ok(1));
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = api_result::<u32>(Err(ShortenerError::not_found("gone")));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
