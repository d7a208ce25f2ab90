use serde::Serialize;
use thiserror::Error;

/// Provider identifier used as the prefix of every error message.
pub(crate) const PROVIDER_NAME: &str = "vimexx";

/// Unified error type for all Vimexx API operations.
///
/// None of these errors are retried by the client. Whether a failed
/// challenge should be attempted again is up to the caller.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The client could not be constructed from the given input.
    #[error("[vimexx] Configuration error: {detail}")]
    Configuration {
        /// What is wrong with the configuration.
        detail: String,
    },

    /// The token endpoint rejected the login.
    #[error("[vimexx] Authentication failed (HTTP {status}): {raw_message}")]
    Authentication {
        /// HTTP status returned by the token endpoint.
        status: u16,
        /// Response body returned by the token endpoint.
        raw_message: String,
    },

    /// A successful response could not be interpreted.
    ///
    /// Covers bodies that are not JSON, token responses without
    /// `access_token` and record responses without `data.dns_records`.
    #[error("[vimexx] Protocol error: {detail}")]
    Protocol {
        /// Details about what was expected.
        detail: String,
    },

    /// An authenticated API call answered with a non-2xx status.
    #[error("[vimexx] API request failed (HTTP {status}): {raw_message}")]
    ApiRequest {
        /// HTTP status returned by the API.
        status: u16,
        /// Response body returned by the API.
        raw_message: String,
    },

    /// The domain could not be split into registrable label and public suffix.
    #[error("[vimexx] Cannot determine registrable domain of '{domain}'")]
    DomainParse {
        /// The domain as given by the caller.
        domain: String,
    },

    /// Writing the updated record set back to the registrar failed.
    #[error("[vimexx] Failed to {operation} TXT record for '{domain}': {source}")]
    DomainOperation {
        /// Domain whose record set was being replaced.
        domain: String,
        /// Operation that was in progress (`add` or `delete`).
        operation: String,
        /// Underlying failure.
        source: Box<ProviderError>,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[vimexx] Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[vimexx] Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("[vimexx] Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、凭证错误、API 拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration { .. }
            | Self::Authentication { .. }
            | Self::ApiRequest { .. }
            | Self::DomainParse { .. } => true,
            Self::DomainOperation { source, .. } => source.is_expected(),
            Self::Protocol { .. }
            | Self::Network { .. }
            | Self::Timeout { .. }
            | Self::Serialization { .. } => false,
        }
    }

    /// HTTP status carried by the error, looking through `DomainOperation`.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::ApiRequest { status, .. } => Some(*status),
            Self::DomainOperation { source, .. } => source.status(),
            _ => None,
        }
    }

    pub(crate) fn protocol(detail: impl ToString) -> Self {
        Self::Protocol {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn domain_operation(domain: &str, operation: &str, source: Self) -> Self {
        Self::DomainOperation {
            domain: domain.to_string(),
            operation: operation.to_string(),
            source: Box::new(source),
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
