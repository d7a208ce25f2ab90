//! Domain decomposition into registrable label and public suffix.

use std::fmt;

use crate::error::{ProviderError, Result};

/// A domain split along the Public Suffix List.
///
/// The WHMCS API addresses a zone by `sld` (the registrable label) and `tld`
/// (the public suffix, which may span several labels such as `co.uk`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    pub sld: String,
    pub tld: String,
}

impl DomainParts {
    /// Splits `domain` into `(sld, tld)`.
    ///
    /// A leading `*.` wildcard marker and a trailing root dot are ignored, and
    /// subdomains are dropped: `*.www.example.co.uk` yields `example` / `co.uk`.
    pub fn parse(domain: &str) -> Result<Self> {
        let name = domain.trim();
        let name = name.strip_prefix("*.").unwrap_or(name);
        let name = name.trim_end_matches('.').to_ascii_lowercase();

        let parse_error = || ProviderError::DomainParse {
            domain: domain.to_string(),
        };

        if name.is_empty() || name.split('.').any(str::is_empty) {
            return Err(parse_error());
        }

        let registrable = psl::domain_str(&name).ok_or_else(parse_error)?;
        let tld = psl::suffix_str(registrable).ok_or_else(parse_error)?;
        let sld = registrable
            .strip_suffix(tld)
            .and_then(|rest| rest.strip_suffix('.'))
            .filter(|sld| !sld.is_empty())
            .ok_or_else(parse_error)?;

        Ok(Self {
            sld: sld.to_string(),
            tld: tld.to_string(),
        })
    }

    /// The registrable domain, `sld.tld`.
    pub fn registrable(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }
}

impl fmt::Display for DomainParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(domain: &str) -> (String, String) {
        let parts = DomainParts::parse(domain).unwrap();
        (parts.sld, parts.tld)
    }

    #[test]
    fn wildcard_multi_label_suffix() {
        assert_eq!(
            parts("*.example.co.uk"),
            ("example".to_string(), "co.uk".to_string())
        );
    }

    #[test]
    fn plain_domain() {
        assert_eq!(parts("example.nl"), ("example".to_string(), "nl".to_string()));
    }

    #[test]
    fn subdomains_are_dropped() {
        assert_eq!(
            parts("_acme-challenge.www.example.com"),
            ("example".to_string(), "com".to_string())
        );
    }

    #[test]
    fn trailing_dot_and_case_are_normalised() {
        assert_eq!(
            parts("WWW.Example.NL."),
            ("example".to_string(), "nl".to_string())
        );
    }

    #[test]
    fn rejoin_reproduces_registrable_domain() {
        for (domain, registrable) in [
            ("example.co.uk", "example.co.uk"),
            ("*.shop.example.com.au", "example.com.au"),
            ("a.b.c.example.nl", "example.nl"),
            ("example.org", "example.org"),
        ] {
            let parts = DomainParts::parse(domain).unwrap();
            assert_eq!(parts.registrable(), registrable, "domain {domain}");
            assert_eq!(parts.to_string(), registrable, "domain {domain}");
        }
    }

    #[test]
    fn bare_suffix_is_rejected() {
        let err = DomainParts::parse("co.uk").unwrap_err();
        assert!(matches!(err, ProviderError::DomainParse { ref domain } if domain == "co.uk"));
    }

    #[test]
    fn empty_and_malformed_are_rejected() {
        for domain in ["", "*.", ".", "example..nl", "nl"] {
            assert!(
                matches!(
                    DomainParts::parse(domain),
                    Err(ProviderError::DomainParse { .. })
                ),
                "domain {domain:?} should not parse"
            );
        }
    }
}
