//! Vimexx WHMCS API client

mod auth;
mod http;
mod records;
mod types;

use std::fmt;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::http_client::create_http_client;

pub(crate) use types::{ApiEnvelope, DnsRecordsData, TokenResponse, WhmcsResponse, ZoneQuery, ZoneUpdate};

/// Production API host.
pub const VIMEXX_API_BASE: &str = "https://api.vimexx.nl";
/// Path prefix of all authenticated endpoints.
pub(crate) const API_PREFIX: &str = "/api/v1";
/// OAuth2 token endpoint.
pub(crate) const TOKEN_PATH: &str = "/auth/token";
/// Record list (POST) and record replace (PUT) endpoint.
pub(crate) const DNS_ENDPOINT: &str = "/whmcs/domain/dns";
/// OAuth2 scope granting WHMCS access.
pub(crate) const OAUTH_SCOPE: &str = "whmcs-access";
/// WHMCS version marker the platform requires in every request envelope.
pub const WHMCS_VERSION: &str = "8.6.1-release.1";

/// Vimexx DNS client
///
/// Holds the OAuth2 session for its lifetime. The bearer token is obtained
/// lazily on the first API request and then reused; it is never refreshed.
/// An expired token surfaces as [`ProviderError::ApiRequest`](crate::ProviderError::ApiRequest)
/// with status 401.
pub struct VimexxClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) access_token: Mutex<Option<String>>,
}

impl VimexxClient {
    /// Creates a client for the production API.
    ///
    /// The credentials are expected to be non-empty; the adapter validates
    /// them before calling this.
    pub fn new(
        client_id: String,
        client_secret: String,
        username: String,
        password: String,
    ) -> Result<Self> {
        log::debug!("Initializing VimexxClient for user {username}");

        Ok(Self {
            client: create_http_client()?,
            base_url: VIMEXX_API_BASE.to_string(),
            client_id,
            client_secret,
            username,
            password,
            access_token: Mutex::new(None),
        })
    }

    /// Points the client at another API host (e.g. a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        log::debug!("Base URL set to {}", self.base_url);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is currently cached.
    pub async fn has_token(&self) -> bool {
        self.access_token.lock().await.is_some()
    }

    /// Drops the cached token so the next request logs in again.
    pub async fn clear_token(&self) {
        *self.access_token.lock().await = None;
    }
}

impl fmt::Debug for VimexxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VimexxClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
