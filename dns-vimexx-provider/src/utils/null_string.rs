//! 可为 `null` 的字符串字段反序列化
//!
//! Records returned by the WHMCS API sometimes carry `null` instead of a
//! string for `name`, `type` or `content`. They are read as empty strings so
//! one odd record does not fail the whole zone.

use serde::{Deserialize, Deserializer};

/// 反序列化：`null` 视为空字符串
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
