//! DNS-01 authenticator contract and its Vimexx implementation.

use async_trait::async_trait;
use dns_vimexx_provider::VimexxClient;

use crate::config::{AuthenticatorConfig, PLUGIN_DESCRIPTION, PLUGIN_NAME};
use crate::credentials::VimexxCredentials;
use crate::error::{PluginError, PluginResult};

/// Label prepended to a domain to form its DNS-01 validation name.
pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge";

/// The lifecycle a certificate tool drives a DNS-01 authenticator through.
///
/// `setup_credentials` runs once before any challenge; `perform` and
/// `cleanup` then run sequentially, once per challenge.
#[async_trait]
pub trait DnsAuthenticator: Send + Sync {
    /// Name the authenticator is registered under.
    fn name(&self) -> &'static str;

    /// One-line description shown by the host.
    fn more_info(&self) -> &'static str;

    /// Seconds the host waits after `perform` before validation.
    fn propagation_seconds(&self) -> u64;

    /// Loads and validates credentials.
    fn setup_credentials(&mut self) -> PluginResult<()>;

    /// Creates the TXT record `validation_name` = `validation`.
    async fn perform(&self, domain: &str, validation_name: &str, validation: &str)
    -> PluginResult<()>;

    /// Removes the TXT record created by `perform`.
    async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str)
    -> PluginResult<()>;
}

/// `_acme-challenge.<domain>`, ignoring a leading wildcard label.
pub fn validation_domain_name(domain: &str) -> String {
    let domain = domain.strip_prefix("*.").unwrap_or(domain);
    format!("{ACME_CHALLENGE_LABEL}.{domain}")
}

/// DNS Authenticator for Vimexx
pub struct VimexxAuthenticator {
    config: AuthenticatorConfig,
    client: Option<VimexxClient>,
}

impl VimexxAuthenticator {
    /// Creates an authenticator; credentials are read by `setup_credentials`.
    pub fn new(config: AuthenticatorConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Creates an authenticator from credentials already at hand.
    pub fn with_credentials(
        config: AuthenticatorConfig,
        credentials: &VimexxCredentials,
    ) -> PluginResult<Self> {
        let mut authenticator = Self::new(config);
        authenticator.client = Some(authenticator.build_client(credentials)?);
        Ok(authenticator)
    }

    pub fn config(&self) -> &AuthenticatorConfig {
        &self.config
    }

    fn build_client(&self, credentials: &VimexxCredentials) -> PluginResult<VimexxClient> {
        log::debug!("Creating Vimexx client");
        let client = VimexxClient::new(
            credentials.client_id().to_string(),
            credentials.client_secret().to_string(),
            credentials.username().to_string(),
            credentials.password().to_string(),
        )?
        .with_base_url(self.config.base_url());
        Ok(client)
    }

    fn client(&self) -> PluginResult<&VimexxClient> {
        self.client
            .as_ref()
            .ok_or_else(|| PluginError::Configuration("Credentials not configured".to_string()))
    }
}

#[async_trait]
impl DnsAuthenticator for VimexxAuthenticator {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn more_info(&self) -> &'static str {
        PLUGIN_DESCRIPTION
    }

    fn propagation_seconds(&self) -> u64 {
        self.config.propagation_seconds()
    }

    fn setup_credentials(&mut self) -> PluginResult<()> {
        let credentials = VimexxCredentials::load(self.config.credentials_path())?;
        self.client = Some(self.build_client(&credentials)?);
        Ok(())
    }

    async fn perform(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> PluginResult<()> {
        log::debug!(
            "Starting new DNS challenge\nDomain: {domain}\nValidation name: {validation_name}\nValidation value: {validation}"
        );

        self.client()?
            .add_txt_record(domain, validation_name, validation)
            .await?;
        Ok(())
    }

    async fn cleanup(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> PluginResult<()> {
        log::info!("Starting DNS challenge cleanup for {validation_name}");

        self.client()?
            .delete_txt_record(domain, validation_name, validation)
            .await?;
        Ok(())
    }
}
