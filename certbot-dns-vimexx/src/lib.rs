//! DNS-01 authenticator for domains registered at Vimexx.
//!
//! [`VimexxAuthenticator`] implements the three-step lifecycle of a DNS
//! authenticator plugin (set up credentials, perform the challenge, clean it
//! up) on top of [`dns_vimexx_provider::VimexxClient`]. The
//! `certbot-dns-vimexx` binary exposes the same lifecycle as certbot manual
//! hooks.

pub mod authenticator;
pub mod config;
pub mod credentials;
pub mod error;
pub mod hook;

pub use authenticator::{DnsAuthenticator, VimexxAuthenticator, validation_domain_name};
pub use config::{AuthenticatorConfig, DEFAULT_PROPAGATION_SECONDS};
pub use credentials::VimexxCredentials;
pub use error::{PluginError, PluginResult};
pub use hook::{HookAction, run_hook};
