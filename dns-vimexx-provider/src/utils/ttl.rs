//! `ttl` 字段序列化/反序列化工具
//!
//! The WHMCS API is inconsistent about TTLs: some records carry none, some a
//! string and some a number. Everything is normalised to `Option<String>`
//! and always written back as a string.

use serde::{Deserialize, Deserializer, Serializer};

/// 序列化 Option<String>；`None` 时由 `skip_serializing_if` 跳过
pub fn serialize<S>(ttl: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ttl {
        Some(ttl) => serializer.serialize_str(ttl),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：支持字符串或整数
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseTtl {
        String(String),
        U64(u64),
        I64(i64),
    }

    Ok(match Option::<LooseTtl>::deserialize(deserializer)? {
        Some(LooseTtl::String(s)) if s.trim().is_empty() => None,
        Some(LooseTtl::String(s)) => Some(s),
        Some(LooseTtl::U64(n)) => Some(n.to_string()),
        Some(LooseTtl::I64(n)) => Some(n.to_string()),
        None => None,
    })
}
