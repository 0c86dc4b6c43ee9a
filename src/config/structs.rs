use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShortenerError};

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - server: 服务器地址、端口、CPU 数量、请求超时
/// - database: 数据库连接配置
/// - cache: 缓存系统配置
/// - short_path: 短路径生成配置
/// - logging: 日志配置
///
/// 启动时构造一次，以 `Arc<StaticConfig>` 显式传递，不存在全局实例。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub short_path: ShortPathConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const ENV_PREFIX: &str = "URLS";

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：URLS，分隔符：__
    /// 示例：URLS__SERVER__PORT=9999
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        match Self::try_load(path) {
            Ok(config) => {
                if Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e.format_simple());
                Self::default()
            }
        }
    }

    fn try_load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ShortenerError::file_operation(format!("Failed to build config: {}", e)))?;

        settings.try_deserialize::<StaticConfig>().map_err(|e| {
            ShortenerError::serialization(format!("Failed to deserialize config: {}", e))
        })
    }

    /// 直接从 TOML 字符串解析，不读取环境变量
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ShortenerError::serialization(format!("Invalid TOML config: {}", e)))
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShortenerError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
    /// Upper bound for a single store call made while serving a request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
}

/// 缓存系统配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    #[serde(default = "default_cache_type")]
    pub cache_type: String,
    #[serde(default = "default_cache_ttl")]
    pub default_ttl: u64,
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }
}

/// Redis 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedisConfig {
    #[serde(default = "default_redis_url")]
    pub url: String,
    #[serde(default = "default_redis_key_prefix")]
    pub key_prefix: String,
}

/// 内存缓存配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryConfig {
    #[serde(default = "default_memory_capacity")]
    pub max_capacity: u64,
}

/// 短路径生成配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortPathConfig {
    #[serde(default = "default_short_path_min_length")]
    pub min_length: usize,
    #[serde(default = "default_short_path_max_attempts")]
    pub max_attempts: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_database_url() -> String {
    "sqlite://url_shortener.db?mode=rwc".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout() -> u64 {
    8
}

fn default_cache_type() -> String {
    "memory".to_string()
}

fn default_cache_ttl() -> u64 {
    3600
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379/".to_string()
}

fn default_redis_key_prefix() -> String {
    "url_shortener:".to_string()
}

fn default_memory_capacity() -> u64 {
    10000
}

fn default_short_path_min_length() -> usize {
    6
}

fn default_short_path_max_attempts() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: default_cache_type(),
            default_ttl: default_cache_ttl(),
            redis: RedisConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            key_prefix: default_redis_key_prefix(),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_memory_capacity(),
        }
    }
}

impl Default for ShortPathConfig {
    fn default() -> Self {
        Self {
            min_length: default_short_path_min_length(),
            max_attempts: default_short_path_max_attempts(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.cache.cache_type, "memory");
        assert_eq!(config.cache.ttl(), Duration::from_secs(3600));
        assert_eq!(config.short_path.min_length, 6);
        assert_eq!(config.short_path.max_attempts, 10);
        assert!(config.database.database_url.starts_with("sqlite://"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = StaticConfig::from_toml_str(
            r#"
            [server]
            port = 9000

            [cache]
            type = "redis"
            default_ttl = 60

            [short_path]
            min_length = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.cache.cache_type, "redis");
        assert_eq!(config.cache.default_ttl, 60);
        assert_eq!(config.cache.redis.key_prefix, "url_shortener:");
        assert_eq!(config.short_path.min_length, 8);
        assert_eq!(config.short_path.max_attempts, 10);
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let err = StaticConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, ShortenerError::Serialization(_)));
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[short_path]"));
        let parsed = StaticConfig::from_toml_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }

    #[test]
    fn test_save_to_file_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        StaticConfig::default().save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("database_url"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let config = StaticConfig::load(path.to_str());
        assert_eq!(config.short_path, ShortPathConfig::default());
    }
}
