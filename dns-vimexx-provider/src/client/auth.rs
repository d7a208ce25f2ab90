//! OAuth2 password-grant login

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, is_success};
use crate::utils::log_sanitizer::mask_secret;

use super::{OAUTH_SCOPE, TOKEN_PATH, TokenResponse, VimexxClient};

/// Encodes `pairs` as an `application/x-www-form-urlencoded` body.
///
/// Every byte outside `A-Z a-z 0-9 - _ . ~` is percent-encoded, including
/// `+`, `&`, `=` and `/`, so passwords with arbitrary characters arrive
/// intact.
pub(crate) fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

impl VimexxClient {
    /// Logs in and caches the bearer token.
    ///
    /// A failed login leaves the client without a token.
    pub async fn authenticate(&self) -> Result<()> {
        let token = self.request_token().await?;
        *self.access_token.lock().await = Some(token);
        Ok(())
    }

    /// Returns the cached token, logging in first if there is none.
    pub(crate) async fn ensure_token(&self) -> Result<String> {
        let mut cached = self.access_token.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        log::info!("Access token not set, authenticating...");
        let token = self.request_token().await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    async fn request_token(&self) -> Result<String> {
        let url = format!("{}{TOKEN_PATH}", self.base_url);
        let body = form_encode(&[
            ("grant_type", "password"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("scope", OAUTH_SCOPE),
        ]);

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);

        let (status, response_text) = HttpUtils::execute_request(request, "POST", &url).await?;

        if !is_success(status) {
            log::error!("Authentication failed with status code {status}");
            return Err(ProviderError::Authentication {
                status,
                raw_message: response_text,
            });
        }

        let token: TokenResponse = HttpUtils::parse_json(&response_text)?;
        let Some(access_token) = token.access_token.filter(|t| !t.is_empty()) else {
            log::error!("No access token in token response");
            return Err(ProviderError::protocol("No access token in response"));
        };

        log::debug!(
            "Obtained access token {} (type: {}, expires in: {}s)",
            mask_secret(&access_token),
            token.token_type.as_deref().unwrap_or("unknown"),
            token
                .expires_in
                .map_or_else(|| "?".to_string(), |s| s.to_string())
        );

        Ok(access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_encode_escapes_reserved_characters() {
        let body = form_encode(&[("password", "p+ss w&rd=/?#%")]);
        assert_eq!(body, "password=p%2Bss%20w%26rd%3D%2F%3F%23%25");
    }

    #[test]
    fn form_encode_keeps_unreserved_and_order() {
        let body = form_encode(&[
            ("grant_type", "password"),
            ("username", "jan.de-vries_01~"),
            ("scope", "whmcs-access"),
        ]);
        assert_eq!(
            body,
            "grant_type=password&username=jan.de-vries_01~&scope=whmcs-access"
        );
    }

    #[test]
    fn form_encode_handles_non_ascii() {
        assert_eq!(form_encode(&[("password", "é")]), "password=%C3%A9");
    }
}
