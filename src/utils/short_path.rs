//! 自定义短路径的格式校验

use crate::errors::{Result, ShortenerError};

pub const MAX_SHORT_PATH_LENGTH: usize = 255;

/// 保留路径：与 API 路由、常见页面和静态资源后缀冲突，不能作为短路径
pub const RESERVED_PATHS: &[&str] = &[
    "api", "health", "urls", "swagger", "docs", "doc", "api-docs", "openapi", "admin", "login",
    "logout", "register", "signup", "signin", "dashboard", "profile", "settings", "help",
    "support", "contact", "about", "privacy", "terms", "faq", "get", "post", "put", "patch",
    "delete", "head", "options", "css", "js", "png", "jpg", "jpeg", "gif", "svg", "ico", "pdf",
    "txt", "xml", "json",
];

pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

pub fn is_reserved(path: &str) -> bool {
    RESERVED_PATHS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(path))
}

/// 校验短路径：长度 1-255，字符集 [A-Za-z0-9-]，且不是保留字
pub fn validate_short_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShortenerError::validation("Short path cannot be empty"));
    }

    if path.len() > MAX_SHORT_PATH_LENGTH {
        return Err(ShortenerError::validation(format!(
            "Short path too long: {} characters (max {})",
            path.len(),
            MAX_SHORT_PATH_LENGTH
        )));
    }

    if let Some(c) = path.chars().find(|c| !is_allowed_char(*c)) {
        return Err(ShortenerError::validation(format!(
            "Short path contains invalid character '{}', only letters, digits and '-' are allowed",
            c
        )));
    }

    if is_reserved(path) {
        return Err(ShortenerError::validation(format!(
            "Short path '{}' is reserved",
            path
        )));
    }

    Ok(())
}
