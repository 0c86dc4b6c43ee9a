//! Deserialization helpers for partial-update payloads and query strings

use serde::{Deserialize, Deserializer};

/// Keeps "field absent" and "field is null" apart.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>` field:
/// - absent → `None` (leave unchanged)
/// - `null` → `Some(None)` (clear)
/// - value → `Some(Some(value))` (set)
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientInt {
    Int(i64),
    Text(String),
}

/// 宽松解析整数参数：无法解析的值视为未提供，由调用方回落到默认值
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LenientInt>::deserialize(deserializer)?;
    Ok(match raw {
        Some(LenientInt::Int(n)) => Some(n),
        Some(LenientInt::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
