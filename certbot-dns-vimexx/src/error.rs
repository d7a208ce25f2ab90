//! Adapter error type

use thiserror::Error;

pub use dns_vimexx_provider::ProviderError;

/// Failure surfaced to the host as a plugin error.
#[derive(Error, Debug)]
pub enum PluginError {
    /// Missing or unusable configuration (credentials file, credential keys).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure reported by the Vimexx client.
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl PluginError {
    /// Whether it is expected behavior (user input, rejected credentials, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Adapter Result type alias
pub type PluginResult<T> = std::result::Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_pass_through_display() {
        let e = PluginError::from(ProviderError::DomainParse {
            domain: "co.uk".to_string(),
        });
        assert_eq!(
            e.to_string(),
            "[vimexx] Cannot determine registrable domain of 'co.uk'"
        );
        assert!(e.is_expected());
    }

    #[test]
    fn configuration_error_display() {
        let e = PluginError::Configuration("Credentials not configured".to_string());
        assert_eq!(e.to_string(), "Configuration error: Credentials not configured");
        assert!(e.is_expected());
    }
}
