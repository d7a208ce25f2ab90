//! DNS record model and record-set splicing.
//!
//! The WHMCS API has no per-record operations: a zone's records are fetched
//! as a whole, changed locally and written back as a whole. [`RecordSet`]
//! holds one such snapshot and implements the two changes the DNS-01 flow
//! needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record type of DNS-01 challenge records.
pub const TXT_RECORD_TYPE: &str = "TXT";

/// TTL substituted where the API does not report one.
pub const DEFAULT_TTL: &str = "86400";

/// TTL of newly created challenge records.
pub const CHALLENGE_TTL: &str = "60";

/// One registrar-side DNS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default, deserialize_with = "crate::utils::null_string::deserialize")]
    pub name: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "crate::utils::null_string::deserialize"
    )]
    pub record_type: String,
    #[serde(default, deserialize_with = "crate::utils::null_string::deserialize")]
    pub content: String,
    #[serde(
        default,
        with = "crate::utils::ttl",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<String>,
    /// Fields this client does not interpret (e.g. `prio`), written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DnsRecord {
    /// A new TXT record for a DNS-01 challenge.
    pub fn challenge(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: TXT_RECORD_TYPE.to_string(),
            content: content.to_string(),
            ttl: Some(CHALLENGE_TTL.to_string()),
            extra: Map::new(),
        }
    }

    /// Whether this is the TXT record `name` = `content`.
    ///
    /// The API may decorate records it returns with a trailing dot on the
    /// name and surrounding quotes on the content; both are ignored.
    pub fn matches_txt(&self, name: &str, content: &str) -> bool {
        self.record_type == TXT_RECORD_TYPE
            && self.name.trim_end_matches('.') == name
            && self.content.trim_matches('"') == content
    }
}

/// A full snapshot of one zone's records, in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<DnsRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<DnsRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DnsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fills in [`DEFAULT_TTL`] where a record has none and appends the
    /// challenge record.
    #[must_use]
    pub fn with_challenge(mut self, name: &str, content: &str) -> Self {
        for record in &mut self.records {
            if record.ttl.is_none() {
                record.ttl = Some(DEFAULT_TTL.to_string());
            }
        }
        self.records.push(DnsRecord::challenge(name, content));
        self
    }

    /// Drops every TXT record matching `name` / `content` and forces
    /// [`DEFAULT_TTL`] on all remaining records.
    ///
    /// Returns the new set and the number of records removed. Zero removals
    /// is not an error.
    #[must_use]
    pub fn without_challenge(self, name: &str, content: &str) -> (Self, usize) {
        let before = self.records.len();
        let mut records: Vec<DnsRecord> = self
            .records
            .into_iter()
            .filter(|record| !record.matches_txt(name, content))
            .collect();
        let removed = before - records.len();

        // The API never reports TTLs reliably, so every survivor is reset.
        for record in &mut records {
            record.ttl = Some(DEFAULT_TTL.to_string());
        }

        (Self { records }, removed)
    }
}
