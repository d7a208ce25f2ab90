//! certbot manual-hook entry point for the Vimexx DNS authenticator.
//!
//! ```bash
//! certbot certonly --manual --preferred-challenges dns \
//!     --manual-auth-hook "certbot-dns-vimexx --credentials /etc/letsencrypt/vimexx.ini auth" \
//!     --manual-cleanup-hook "certbot-dns-vimexx --credentials /etc/letsencrypt/vimexx.ini cleanup" \
//!     -d example.nl -d '*.example.nl'
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use certbot_dns_vimexx::config::PLUGIN_DESCRIPTION;
use certbot_dns_vimexx::{
    AuthenticatorConfig, DEFAULT_PROPAGATION_SECONDS, DnsAuthenticator, HookAction,
    PluginError, VimexxAuthenticator, run_hook,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "certbot-dns-vimexx", version, about = PLUGIN_DESCRIPTION)]
struct Cli {
    /// Vimexx credentials INI file.
    #[arg(long, env = "VIMEXX_CREDENTIALS")]
    credentials: PathBuf,

    /// Seconds to wait for DNS propagation after creating the record.
    #[arg(long, default_value_t = DEFAULT_PROPAGATION_SECONDS)]
    propagation_seconds: u64,

    /// Override the Vimexx API host.
    #[arg(long, env = "VIMEXX_API_BASE")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the challenge TXT record (certbot --manual-auth-hook).
    Auth(ChallengeArgs),
    /// Remove the challenge TXT record (certbot --manual-cleanup-hook).
    Cleanup(ChallengeArgs),
}

#[derive(Debug, Args)]
struct ChallengeArgs {
    /// Domain being validated.
    #[arg(long, env = "CERTBOT_DOMAIN")]
    domain: String,

    /// Expected TXT record content.
    #[arg(long, env = "CERTBOT_VALIDATION")]
    validation: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // stdout is left to certbot; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(log_filter())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let expected = e
                .downcast_ref::<PluginError>()
                .is_some_and(PluginError::is_expected);
            if expected {
                tracing::warn!("{e:#}");
            } else {
                tracing::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// `info` unless `RUST_LOG` says otherwise.
fn log_filter() -> EnvFilter {
    filter_builder().from_env_lossy()
}

fn filter_builder() -> tracing_subscriber::filter::Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AuthenticatorConfig::new(cli.credentials)
        .with_propagation_seconds(cli.propagation_seconds);
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let mut authenticator = VimexxAuthenticator::new(config);
    authenticator.setup_credentials()?;

    let (action, args) = match cli.command {
        Command::Auth(args) => (HookAction::Auth, args),
        Command::Cleanup(args) => (HookAction::Cleanup, args),
    };

    tracing::info!(
        "Running {} hook for {} ({:?})",
        authenticator.name(),
        args.domain,
        action
    );

    run_hook(&authenticator, action, &args.domain, &args.validation)
        .await
        .with_context(|| format!("{action:?} hook failed for {}", args.domain))?;

    Ok(())
}
