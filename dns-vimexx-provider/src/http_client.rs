//! Generic HTTP client tools
//!
//! Sending requests, logging and reading responses is the same for the token
//! endpoint and the WHMCS endpoints; the callers build the `RequestBuilder`
//! and interpret the status code themselves.
//!
//! Nothing here retries. A failed request surfaces immediately.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{PROVIDER_NAME, ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::Configuration {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any status, 2xx or not
    /// * `Err(ProviderError::Network | ProviderError::Timeout)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{PROVIDER_NAME}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{PROVIDER_NAME}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| ProviderError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{PROVIDER_NAME}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// An empty body parses as JSON `null`.
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = if response_text.trim().is_empty() {
            "null"
        } else {
            response_text
        };

        serde_json::from_str(text).map_err(|e| {
            log::error!("[{PROVIDER_NAME}] JSON parse failed: {e}");
            log::error!(
                "[{PROVIDER_NAME}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::protocol(format!("Invalid JSON response: {e}"))
        })
    }
}

/// Whether `status` is a 2xx status.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(199));
        assert!(!is_success(301));
        assert!(!is_success(401));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid_is_protocol_error() {
        let result: Result<serde_json::Value> = HttpUtils::parse_json("<html>502</html>");
        assert!(
            matches!(&result, Err(ProviderError::Protocol { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_empty_body_is_null() {
        let result: Result<serde_json::Value> = HttpUtils::parse_json("  ");
        assert!(
            matches!(&result, Ok(serde_json::Value::Null)),
            "unexpected parse result: {result:?}"
        );
    }
}
