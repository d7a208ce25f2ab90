//! Vimexx HTTP 请求方法

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, is_success};

use super::{API_PREFIX, ApiEnvelope, VimexxClient, WHMCS_VERSION};

impl VimexxClient {
    /// Performs an authenticated WHMCS API request.
    ///
    /// `body` is wrapped in the `{ body, version }` envelope. GET sends the
    /// envelope as query parameters (`body` JSON-encoded); every other method
    /// sends it as a JSON body. Logs in first if no token is cached.
    ///
    /// Any non-2xx status fails with [`ProviderError::ApiRequest`].
    pub async fn api_request<B, T>(&self, endpoint: &str, method: Method, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let token = self.ensure_token().await?;

        let url = format!("{}{API_PREFIX}{endpoint}", self.base_url);
        let envelope = ApiEnvelope {
            body,
            version: WHMCS_VERSION,
        };

        let request = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&token);

        let request = if method == Method::GET {
            let body_json =
                serde_json::to_string(envelope.body).map_err(|e| ProviderError::Serialization {
                    detail: e.to_string(),
                })?;
            request.query(&[("body", body_json.as_str()), ("version", envelope.version)])
        } else {
            if log::log_enabled!(log::Level::Debug) {
                let body_json = serde_json::to_string(&envelope)
                    .unwrap_or_else(|_| "<unserializable request body>".to_string());
                log::debug!("Request Body: {body_json}");
            }
            request.json(&envelope)
        };

        let (status, response_text) =
            HttpUtils::execute_request(request, method.as_str(), &url).await?;

        if !is_success(status) {
            log::error!("{method} {endpoint} failed with status code {status}");
            return Err(ProviderError::ApiRequest {
                status,
                raw_message: response_text,
            });
        }

        HttpUtils::parse_json(&response_text)
    }
}
