//! Short path generation and allocation
//!
//! `generate_short_path` draws characters from the thread-local CSPRNG.
//! `ShortPathResolver` turns candidates into a free short path by asking an
//! existence check, growing the length by one after every collision.

use std::future::Future;
use std::iter;

use tracing::{debug, warn};

use crate::config::ShortPathConfig;
use crate::errors::{Result, ShortenerError};
use crate::utils::short_path::{MAX_SHORT_PATH_LENGTH, is_reserved};

pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// 生成指定长度的随机短路径
pub fn generate_short_path(length: usize) -> String {
    iter::repeat_with(|| ALPHABET[rand::random_range(0..ALPHABET.len())] as char)
        .take(length)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortPathResolver {
    min_length: usize,
    max_attempts: usize,
}

impl Default for ShortPathResolver {
    fn default() -> Self {
        Self::from_config(&ShortPathConfig::default())
    }
}

impl ShortPathResolver {
    pub fn new(min_length: usize, max_attempts: usize) -> Self {
        Self {
            min_length: min_length.clamp(1, MAX_SHORT_PATH_LENGTH),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn from_config(config: &ShortPathConfig) -> Self {
        Self::new(config.min_length, config.max_attempts)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// 找到一个未被占用的短路径
    ///
    /// 每次尝试生成一个候选并调用 `exists`；命中已存在的记录后长度加一。
    /// 用完 `max_attempts` 次仍未成功时返回 `Exhausted`。`exists` 的错误直接返回。
    pub async fn resolve<F, Fut>(&self, mut exists: F) -> Result<String>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        let mut length = self.min_length;

        for attempt in 1..=self.max_attempts {
            let candidate = generate_short_path(length);

            // 保留字同样视为冲突
            let taken = is_reserved(&candidate) || exists(candidate.clone()).await?;
            if !taken {
                debug!(
                    "Allocated short path '{}' (length {}, attempt {})",
                    candidate, length, attempt
                );
                return Ok(candidate);
            }

            debug!(
                "Short path collision at length {} (attempt {}/{})",
                length, attempt, self.max_attempts
            );
            length = (length + 1).min(MAX_SHORT_PATH_LENGTH);
        }

        warn!(
            "Short path allocation exhausted after {} attempts",
            self.max_attempts
        );
        Err(ShortenerError::exhausted(format!(
            "Could not allocate a unique short path after {} attempts",
            self.max_attempts
        )))
    }
}
