use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenerError {
    Validation(String),
    Conflict(String),
    NotFound(String),
    Exhausted(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Timeout(String),
    CacheConnection(String),
    CacheOperation(String),
    Serialization(String),
    FileOperation(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::Validation(_) => "E001",
            ShortenerError::Conflict(_) => "E002",
            ShortenerError::NotFound(_) => "E003",
            ShortenerError::Exhausted(_) => "E004",
            ShortenerError::DatabaseConfig(_) => "E005",
            ShortenerError::DatabaseConnection(_) => "E006",
            ShortenerError::DatabaseOperation(_) => "E007",
            ShortenerError::Timeout(_) => "E008",
            ShortenerError::CacheConnection(_) => "E009",
            ShortenerError::CacheOperation(_) => "E010",
            ShortenerError::Serialization(_) => "E011",
            ShortenerError::FileOperation(_) => "E012",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::Validation(_) => "Validation Error",
            ShortenerError::Conflict(_) => "Conflict",
            ShortenerError::NotFound(_) => "Resource Not Found",
            ShortenerError::Exhausted(_) => "Short Path Space Exhausted",
            ShortenerError::DatabaseConfig(_) => "Database Configuration Error",
            ShortenerError::DatabaseConnection(_) => "Database Connection Error",
            ShortenerError::DatabaseOperation(_) => "Database Operation Error",
            ShortenerError::Timeout(_) => "Dependency Timeout",
            ShortenerError::CacheConnection(_) => "Cache Connection Error",
            ShortenerError::CacheOperation(_) => "Cache Operation Error",
            ShortenerError::Serialization(_) => "Serialization Error",
            ShortenerError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::Validation(msg)
            | ShortenerError::Conflict(msg)
            | ShortenerError::NotFound(msg)
            | ShortenerError::Exhausted(msg)
            | ShortenerError::DatabaseConfig(msg)
            | ShortenerError::DatabaseConnection(msg)
            | ShortenerError::DatabaseOperation(msg)
            | ShortenerError::Timeout(msg)
            | ShortenerError::CacheConnection(msg)
            | ShortenerError::CacheOperation(msg)
            | ShortenerError::Serialization(msg)
            | ShortenerError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status the request layer answers with.
    ///
    /// Client mistakes (validation, conflict, not found) are 4xx; namespace
    /// exhaustion and store failures are 5xx.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ShortenerError::Validation(_) => StatusCode::BAD_REQUEST,
            ShortenerError::Conflict(_) => StatusCode::CONFLICT,
            ShortenerError::NotFound(_) => StatusCode::NOT_FOUND,
            ShortenerError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            ShortenerError::Exhausted(_)
            | ShortenerError::DatabaseConfig(_)
            | ShortenerError::DatabaseConnection(_)
            | ShortenerError::DatabaseOperation(_)
            | ShortenerError::CacheConnection(_)
            | ShortenerError::CacheOperation(_)
            | ShortenerError::Serialization(_)
            | ShortenerError::FileOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ShortenerError::Conflict(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ShortenerError::NotFound(_))
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

// 便捷的构造函数
impl ShortenerError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Validation(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortenerError::NotFound(msg.into())
    }

    pub fn exhausted<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Exhausted(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseOperation(msg.into())
    }

    pub fn timeout<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Timeout(msg.into())
    }

    pub fn cache_connection<T: Into<String>>(msg: T) -> Self {
        ShortenerError::CacheConnection(msg.into())
    }

    pub fn cache_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::CacheOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::FileOperation(msg.into())
    }
}

/// 通过错误消息判断是否为唯一约束冲突（sql_err 无法识别时的回退方案）
fn is_unique_violation_message(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("unique constraint")
        || msg.contains("duplicate key")
        || msg.contains("duplicate entry")
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ShortenerError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::SqlErr;

        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return ShortenerError::Conflict(detail);
        }

        let msg = err.to_string();
        if is_unique_violation_message(&msg) {
            return ShortenerError::Conflict(msg);
        }

        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                ShortenerError::DatabaseConnection(msg)
            }
            _ => ShortenerError::DatabaseOperation(msg),
        }
    }
}

impl From<redis::RedisError> for ShortenerError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_connection_refusal() || err.is_connection_dropped() || err.is_timeout() {
            ShortenerError::CacheConnection(err.to_string())
        } else {
            ShortenerError::CacheOperation(err.to_string())
        }
    }
}

impl From<std::io::Error> for ShortenerError {
    fn from(err: std::io::Error) -> Self {
        ShortenerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortenerError {
    fn from(err: serde_json::Error) -> Self {
        ShortenerError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;
