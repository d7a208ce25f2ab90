//! Plugin options and metadata.

use std::path::{Path, PathBuf};

use dns_vimexx_provider::VIMEXX_API_BASE;

/// Name under which the authenticator is registered with the host.
pub const PLUGIN_NAME: &str = "dns-vimexx";

/// Name of the option holding the credentials file path.
pub const CREDENTIALS_OPTION: &str = "credentials";

/// Help text of the credentials option.
pub const CREDENTIALS_HELP: &str = "Vimexx credentials INI file.";

/// Seconds to wait for DNS propagation before the challenge is validated.
pub const DEFAULT_PROPAGATION_SECONDS: u64 = 30;

pub const PLUGIN_DESCRIPTION: &str = "This plugin configures a DNS TXT record to respond to a \
    dns-01 challenge using the WHMCS API for Vimexx.";

/// Options of one authenticator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatorConfig {
    credentials_path: PathBuf,
    propagation_seconds: u64,
    base_url: String,
}

impl AuthenticatorConfig {
    pub fn new(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            propagation_seconds: DEFAULT_PROPAGATION_SECONDS,
            base_url: VIMEXX_API_BASE.to_string(),
        }
    }

    #[must_use]
    pub fn with_propagation_seconds(mut self, seconds: u64) -> Self {
        self.propagation_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    pub fn propagation_seconds(&self) -> u64 {
        self.propagation_seconds
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
