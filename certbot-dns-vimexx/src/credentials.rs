//! Credentials file loading and validation.
//!
//! The file is INI-style:
//!
//! ```ini
//! dns_vimexx_client_id = 1234
//! dns_vimexx_client_secret = s3cr3t
//! dns_vimexx_username = user@example.nl
//! dns_vimexx_password = p@ss;w0rd#1
//! ```
//!
//! A `[default]` header is optional; files without any section header are
//! read as if they started with one. Values are taken verbatim, without
//! escape or quote processing, so passwords may contain any character.

use std::fmt;
use std::path::Path;

use dns_vimexx_provider::log_sanitizer::mask_secret;
use ini::{Ini, ParseOption};

use crate::error::{PluginError, PluginResult};

pub const CLIENT_ID_KEY: &str = "dns_vimexx_client_id";
pub const CLIENT_SECRET_KEY: &str = "dns_vimexx_client_secret";
pub const USERNAME_KEY: &str = "dns_vimexx_username";
pub const PASSWORD_KEY: &str = "dns_vimexx_password";

/// Section the credential keys are read from.
const DEFAULT_SECTION: &str = "default";

/// The four validated Vimexx credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct VimexxCredentials {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
}

impl VimexxCredentials {
    /// Builds credentials, rejecting blank values.
    ///
    /// Every blank field is named in the one error returned.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> PluginResult<Self> {
        Self::from_fields([
            Some(client_id.into()),
            Some(client_secret.into()),
            Some(username.into()),
            Some(password.into()),
        ])
    }

    /// Reads and validates the credentials file at `path`.
    pub fn load(path: &Path) -> PluginResult<Self> {
        log::debug!("Starting credentials setup from {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|e| {
            PluginError::Configuration(format!(
                "Cannot read credentials file {}: {e}",
                path.display()
            ))
        })?;
        warn_on_open_permissions(path);

        Self::from_ini_str(&text)
    }

    /// Parses and validates credentials from INI text.
    pub fn from_ini_str(text: &str) -> PluginResult<Self> {
        let text = if has_section_header(text) {
            text.to_string()
        } else {
            log::debug!("No section header found in credentials file, adding [{DEFAULT_SECTION}] section");
            format!("[{DEFAULT_SECTION}]\n{text}")
        };

        let option = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(&text, option).map_err(|e| {
            PluginError::Configuration(format!("Invalid credentials file: {e}"))
        })?;

        let lookup = |key: &str| {
            ini.section(Some(DEFAULT_SECTION)).and_then(|section| {
                section
                    .iter()
                    .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
                    .map(|(_, v)| v.to_string())
            })
        };

        Self::from_fields([
            lookup(CLIENT_ID_KEY),
            lookup(CLIENT_SECRET_KEY),
            lookup(USERNAME_KEY),
            lookup(PASSWORD_KEY),
        ])
    }

    fn from_fields(fields: [Option<String>; 4]) -> PluginResult<Self> {
        const KEYS: [&str; 4] = [CLIENT_ID_KEY, CLIENT_SECRET_KEY, USERNAME_KEY, PASSWORD_KEY];

        let missing: Vec<&str> = KEYS
            .iter()
            .zip(&fields)
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(key, _)| *key)
            .collect();
        if !missing.is_empty() {
            return Err(PluginError::Configuration(format!(
                "Missing required credentials: {}",
                missing.join(", ")
            )));
        }

        let [Some(client_id), Some(client_secret), Some(username), Some(password)] = fields else {
            return Err(PluginError::Configuration(
                "Missing required credentials".to_string(),
            ));
        };

        Ok(Self {
            client_id,
            client_secret,
            username,
            password,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for VimexxCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VimexxCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("username", &self.username)
            .field("password", &mask_secret(&self.password))
            .finish()
    }
}

/// Whether the first meaningful line of `text` is a `[section]` header.
fn has_section_header(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(';'))
        .is_some_and(|line| line.starts_with('['))
}

#[cfg(unix)]
fn warn_on_open_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = std::fs::metadata(path)
        && metadata.permissions().mode() & 0o077 != 0
    {
        log::warn!(
            "Unsafe permissions on credentials file {}: readable by other users",
            path.display()
        );
    }
}

#[cfg(not(unix))]
fn warn_on_open_permissions(_path: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
dns_vimexx_client_id = 1234
dns_vimexx_client_secret = s3cr3t
dns_vimexx_username = user@example.nl
dns_vimexx_password = p@ss;w0rd#1\\%(x)s
";

    fn config_message(result: PluginResult<VimexxCredentials>) -> String {
        match result {
            Err(PluginError::Configuration(message)) => message,
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn reads_file_without_section_header() {
        let creds = VimexxCredentials::from_ini_str(FULL).unwrap();
        assert_eq!(creds.client_id(), "1234");
        assert_eq!(creds.client_secret(), "s3cr3t");
        assert_eq!(creds.username(), "user@example.nl");
        assert_eq!(creds.password(), "p@ss;w0rd#1\\%(x)s");
    }

    #[test]
    fn reads_default_section() {
        let text = format!("# vimexx\n[default]\n{FULL}");
        let creds = VimexxCredentials::from_ini_str(&text).unwrap();
        assert_eq!(creds.username(), "user@example.nl");
    }

    #[test]
    fn comment_before_keys_still_gets_synthetic_section() {
        let text = format!("; credentials for certbot\n\n{FULL}");
        let creds = VimexxCredentials::from_ini_str(&text).unwrap();
        assert_eq!(creds.client_id(), "1234");
    }

    #[test]
    fn keys_are_case_insensitive() {
        let text = FULL.replace("dns_vimexx_username", "DNS_VIMEXX_USERNAME");
        let creds = VimexxCredentials::from_ini_str(&text).unwrap();
        assert_eq!(creds.username(), "user@example.nl");
    }

    #[test]
    fn missing_password_is_named() {
        let text = FULL
            .lines()
            .filter(|l| !l.starts_with(PASSWORD_KEY))
            .collect::<Vec<_>>()
            .join("\n");
        let message = config_message(VimexxCredentials::from_ini_str(&text));
        assert_eq!(message, "Missing required credentials: dns_vimexx_password");
    }

    #[test]
    fn all_missing_keys_reported_together() {
        let text = "dns_vimexx_client_id = 1234\ndns_vimexx_username =\n";
        let message = config_message(VimexxCredentials::from_ini_str(text));
        assert_eq!(
            message,
            "Missing required credentials: dns_vimexx_client_secret, dns_vimexx_username, dns_vimexx_password"
        );
    }

    #[test]
    fn keys_outside_default_section_are_ignored() {
        let text = format!("[other]\n{FULL}");
        let message = config_message(VimexxCredentials::from_ini_str(&text));
        assert!(message.contains(CLIENT_ID_KEY));
        assert!(message.contains(PASSWORD_KEY));
    }

    #[test]
    fn new_rejects_blank_fields() {
        let message = config_message(VimexxCredentials::new("id", " ", "user", ""));
        assert_eq!(
            message,
            "Missing required credentials: dns_vimexx_client_secret, dns_vimexx_password"
        );
    }

    #[test]
    fn debug_masks_secrets() {
        let creds =
            VimexxCredentials::new("1234", "very-long-client-secret", "user", "hunter2").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("very-long-client-secret"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn section_header_detection() {
        assert!(has_section_header("\n  [default]\nkey = value"));
        assert!(has_section_header("# comment\n[default]"));
        assert!(!has_section_header("key = value\n[default]"));
        assert!(!has_section_header(""));
    }
}
