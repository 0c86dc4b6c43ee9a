//! 目标地址验证
//!
//! 只接受带主机名的 http(s) 地址，拒绝脚本类协议

use url::Url;

use crate::errors::{Result, ShortenerError};

/// 危险协议列表
const DANGEROUS_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// 验证目标 URL
///
/// 检查项目：
/// 1. 不为空
/// 2. 不含控制字符（URL 解析会静默丢弃制表符和换行，原样存储后无法写入 Location 头）
/// 3. 不是危险协议
/// 4. 必须是 http 或 https 且包含主机名
pub fn validate_destination(destination: &str) -> Result<()> {
    let destination = destination.trim();

    if destination.is_empty() {
        return Err(ShortenerError::validation("Destination URL cannot be empty"));
    }

    if destination.chars().any(char::is_control) {
        return Err(ShortenerError::validation(
            "Destination URL must not contain control characters",
        ));
    }

    let scheme = destination
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase())
        .unwrap_or_default();

    if DANGEROUS_SCHEMES.contains(&scheme.as_str()) {
        return Err(ShortenerError::validation(format!(
            "Destination protocol '{}:' is not allowed",
            scheme
        )));
    }

    if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        return Err(ShortenerError::validation(
            "Destination URL must start with http:// or https://",
        ));
    }

    let parsed = Url::parse(destination).map_err(|e| {
        ShortenerError::validation(format!("Invalid destination URL: {}", e))
    })?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ShortenerError::validation(
            "Destination URL must include a host",
        ));
    }

    Ok(())
}
