//! Running the authenticator as a certbot manual hook.
//!
//! With `--manual-auth-hook` / `--manual-cleanup-hook` certbot runs an
//! external program per challenge instead of loading a plugin, and does not
//! wait for propagation itself. The auth hook therefore sleeps
//! `propagation_seconds` after the record is in place.

use std::time::Duration;

use crate::authenticator::{DnsAuthenticator, validation_domain_name};
use crate::error::PluginResult;

/// Which hook certbot invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    Auth,
    Cleanup,
}

/// Runs one hook invocation for `domain` with challenge value `validation`.
pub async fn run_hook<A>(
    authenticator: &A,
    action: HookAction,
    domain: &str,
    validation: &str,
) -> PluginResult<()>
where
    A: DnsAuthenticator + ?Sized,
{
    let validation_name = validation_domain_name(domain);

    match action {
        HookAction::Auth => {
            authenticator
                .perform(domain, &validation_name, validation)
                .await?;

            let wait = authenticator.propagation_seconds();
            if wait > 0 {
                log::info!("Waiting {wait} seconds for DNS changes to propagate");
                tokio::time::sleep(Duration::from_secs(wait)).await;
            }
        }
        HookAction::Cleanup => {
            authenticator
                .cleanup(domain, &validation_name, validation)
                .await?;
        }
    }

    Ok(())
}
