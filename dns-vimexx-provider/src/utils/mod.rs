//! Utility modules.

/// Log sanitization helpers so tokens and passwords never reach the logs.
pub mod log_sanitizer;

/// Serde helper reading `null` string fields as empty.
pub mod null_string;

/// Serde helpers for the loosely typed `ttl` field.
pub mod ttl;
