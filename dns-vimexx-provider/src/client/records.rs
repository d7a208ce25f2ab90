//! DNS-01 challenge record operations

use reqwest::Method;
use serde_json::Value;

use crate::domain::DomainParts;
use crate::error::{ProviderError, Result};
use crate::types::RecordSet;

use super::{DNS_ENDPOINT, DnsRecordsData, VimexxClient, WhmcsResponse, ZoneQuery, ZoneUpdate};

impl VimexxClient {
    /// Fetches the complete record set of the zone containing `domain`.
    pub async fn fetch_records(&self, domain: &str) -> Result<RecordSet> {
        let zone = DomainParts::parse(domain)?;
        self.fetch_zone(&zone).await
    }

    /// Adds the TXT record `record_name` = `record_content` to the zone of
    /// `domain`.
    ///
    /// Existing records without a TTL are written back with
    /// [`DEFAULT_TTL`](crate::DEFAULT_TTL); the new record gets
    /// [`CHALLENGE_TTL`](crate::CHALLENGE_TTL).
    pub async fn add_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_content: &str,
    ) -> Result<()> {
        log::info!("Adding TXT record for domain {domain}: {record_name}");
        log::debug!("TXT record content: {record_content}");

        let zone = DomainParts::parse(domain)?;
        let current = self.fetch_zone(&zone).await?;
        log::debug!("Found {} existing records", current.len());

        let updated = current.with_challenge(record_name, record_content);

        log::debug!("Updating DNS records (total: {})...", updated.len());
        self.replace_zone(&zone, &updated)
            .await
            .map_err(|e| ProviderError::domain_operation(domain, "add", e))?;

        log::info!("TXT record added successfully");
        Ok(())
    }

    /// Removes every TXT record `record_name` = `record_content` from the
    /// zone of `domain`.
    ///
    /// Succeeds when nothing matches. All remaining records are written back
    /// with [`DEFAULT_TTL`](crate::DEFAULT_TTL).
    pub async fn delete_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_content: &str,
    ) -> Result<()> {
        log::info!("Deleting TXT record for domain {domain}: {record_name}");

        let zone = DomainParts::parse(domain)?;
        let current = self.fetch_zone(&zone).await?;
        log::debug!("Found {} existing records", current.len());

        let (updated, removed) = current.without_challenge(record_name, record_content);
        if removed == 0 {
            log::warn!("No TXT record '{record_name}' with the expected content found");
        } else {
            log::debug!("Removed {removed} matching record(s), {} remain", updated.len());
        }

        self.replace_zone(&zone, &updated)
            .await
            .map_err(|e| ProviderError::domain_operation(domain, "delete", e))?;

        log::info!("TXT record deleted successfully");
        Ok(())
    }

    async fn fetch_zone(&self, zone: &DomainParts) -> Result<RecordSet> {
        log::debug!("Fetching current DNS records for {zone}...");

        let query = ZoneQuery {
            sld: &zone.sld,
            tld: &zone.tld,
        };
        let response: WhmcsResponse<DnsRecordsData> =
            self.api_request(DNS_ENDPOINT, Method::POST, &query).await?;

        if let Some(message) = response.message.as_deref() {
            log::debug!("API message (result: {:?}): {message}", response.result);
        }

        response
            .data
            .and_then(|data| data.dns_records)
            .map(RecordSet::new)
            .ok_or_else(|| {
                ProviderError::protocol(format!("No data.dns_records in response for {zone}"))
            })
    }

    async fn replace_zone(&self, zone: &DomainParts, records: &RecordSet) -> Result<()> {
        let update = ZoneUpdate {
            sld: &zone.sld,
            tld: &zone.tld,
            dns_records: records.records(),
        };
        let _: Value = self.api_request(DNS_ENDPOINT, Method::PUT, &update).await?;
        Ok(())
    }
}
