//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::ShortenerError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: URL 错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // URL 错误 3000-3099
    UrlNotFound = 3000,
    UrlShortPathTaken = 3001,
    UrlValidationFailed = 3002,
    UrlShortPathExhausted = 3003,
    UrlDatabaseError = 3005,
}

impl From<&ShortenerError> for ErrorCode {
    fn from(err: &ShortenerError) -> Self {
        match err {
            ShortenerError::Validation(_) => ErrorCode::UrlValidationFailed,
            ShortenerError::Conflict(_) => ErrorCode::UrlShortPathTaken,
            ShortenerError::NotFound(_) => ErrorCode::UrlNotFound,
            ShortenerError::Exhausted(_) => ErrorCode::UrlShortPathExhausted,
            ShortenerError::DatabaseConfig(_)
            | ShortenerError::DatabaseConnection(_)
            | ShortenerError::DatabaseOperation(_) => ErrorCode::UrlDatabaseError,
            ShortenerError::Timeout(_) => ErrorCode::ServiceUnavailable,
            ShortenerError::CacheConnection(_)
            | ShortenerError::CacheOperation(_)
            | ShortenerError::Serialization(_)
            | ShortenerError::FileOperation(_) => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::Success).unwrap(), "0");
        assert_eq!(
            serde_json::to_string(&ErrorCode::UrlShortPathTaken).unwrap(),
            "3001"
        );
        let code: ErrorCode = serde_json::from_str("1004").unwrap();
        assert_eq!(code, ErrorCode::NotFound);
    }

    #[test]
    fn test_from_shortener_error() {
        assert_eq!(
            ErrorCode::from(&ShortenerError::conflict("taken")),
            ErrorCode::UrlShortPathTaken
        );
        assert_eq!(
            ErrorCode::from(&ShortenerError::validation("bad")),
            ErrorCode::UrlValidationFailed
        );
        assert_eq!(
            ErrorCode::from(&ShortenerError::exhausted("full")),
            ErrorCode::UrlShortPathExhausted
        );
        assert_eq!(
            ErrorCode::from(&ShortenerError::timeout("slow")),
            ErrorCode::ServiceUnavailable
        );
    }
}
