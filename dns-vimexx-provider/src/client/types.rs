//! Vimexx API 类型定义

use serde::{Deserialize, Serialize};

use crate::types::DnsRecord;

/// OAuth2 token endpoint response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// Wrapper the WHMCS API expects around every request body.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<'a, B: Serialize> {
    pub body: &'a B,
    pub version: &'static str,
}

/// WHMCS API 通用响应
#[derive(Debug, Deserialize)]
pub struct WhmcsResponse<T> {
    pub result: Option<bool>,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// `data` of the record list endpoint
#[derive(Debug, Deserialize)]
pub struct DnsRecordsData {
    pub dns_records: Option<Vec<DnsRecord>>,
}

/// Request body addressing one zone.
#[derive(Debug, Serialize)]
pub struct ZoneQuery<'a> {
    pub sld: &'a str,
    pub tld: &'a str,
}

/// Request body replacing one zone's records.
#[derive(Debug, Serialize)]
pub struct ZoneUpdate<'a> {
    pub sld: &'a str,
    pub tld: &'a str,
    pub dns_records: &'a [DnsRecord],
}
