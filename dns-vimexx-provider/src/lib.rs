//! # dns-vimexx-provider
//!
//! Client for the [Vimexx](https://www.vimexx.nl/) WHMCS API, limited to what
//! a DNS-01 challenge needs: creating and removing one TXT record.
//!
//! The API has no per-record endpoints. Every change fetches the zone's full
//! record set, splices it in memory and writes the full set back.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_vimexx_provider::VimexxClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VimexxClient::new(
//!         "client-id".to_string(),
//!         "client-secret".to_string(),
//!         "user@example.nl".to_string(),
//!         "password".to_string(),
//!     )?;
//!
//!     client
//!         .add_txt_record("example.nl", "_acme-challenge.example.nl", "token")
//!         .await?;
//!     client
//!         .delete_txt_record("example.nl", "_acme-challenge.example.nl", "token")
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Authentication`] — the login was rejected
//! - [`ProviderError::ApiRequest`] — an API call answered non-2xx
//! - [`ProviderError::DomainParse`] — no registrable domain in the input
//! - [`ProviderError::DomainOperation`] — writing the record set back failed
//!
//! Nothing is retried internally.

mod client;
mod domain;
mod error;
mod http_client;
mod types;
mod utils;

pub use client::{VIMEXX_API_BASE, VimexxClient, WHMCS_VERSION};
pub use domain::DomainParts;
pub use error::{ProviderError, Result};
pub use reqwest::Method;
pub use types::{CHALLENGE_TTL, DEFAULT_TTL, DnsRecord, RecordSet, TXT_RECORD_TYPE};
pub use utils::log_sanitizer;
