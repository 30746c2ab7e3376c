//! Invoice lookup sources.
//!
//! The only implementation today synthesizes issuance data from the access
//! key itself. A real SEFAZ client (digital certificate handshake, SOAP
//! envelope) would slot in behind the same trait and error taxonomy.

use std::time::Duration;

use async_trait::async_trait;
use nfe_core::{format::strip_leading_zeros, AccessKey, InvoiceRecord, InvoiceStatus, Issuer, Recipient};
use thiserror::Error;

/// Lookup failure taxonomy.
///
/// Key format errors never reach a source; handlers validate first.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The authority has no record for this key
    #[error("no invoice found for this access key")]
    NotFound,

    /// The authority could not be reached
    #[error("lookup service unavailable: {0}")]
    Unavailable(String),
}

/// A source of authoritative invoice issuance data.
///
/// Contract: the same key always resolves to the same record.
#[async_trait]
pub trait InvoiceSource: Send + Sync {
    async fn lookup(&self, key: &AccessKey) -> Result<InvoiceRecord, LookupError>;
}

/// Synthesizes invoice data from the key's own structural fields.
///
/// Deterministic by construction, including the pseudo total value, so
/// repeated lookups of one key agree with each other.
pub struct SimulatedInvoiceSource {
    delay: Duration,
}

impl SimulatedInvoiceSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Derive a stable pseudo-total in BRL (two decimal places) from the
    /// key digits. Not meaningful data, just reproducible demo data.
    fn total_value(key: &AccessKey) -> String {
        let cents = key
            .as_str()
            .bytes()
            .fold(0u64, |acc, b| {
                acc.wrapping_mul(31).wrapping_add(u64::from(b - b'0'))
            })
            % 1_000_000;
        format!("{}.{:02}", cents / 100, cents % 100)
    }
}

#[async_trait]
impl InvoiceSource for SimulatedInvoiceSource {
    async fn lookup(&self, key: &AccessKey) -> Result<InvoiceRecord, LookupError> {
        // Stand-in for the round trip a real authority query would take.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let fields = key.fields();
        Ok(InvoiceRecord {
            access_key: key.as_str().to_string(),
            number: strip_leading_zeros(fields.number).to_string(),
            series: strip_leading_zeros(fields.series).to_string(),
            issued_at: format!("{}/20{}", fields.emission_month, fields.emission_year),
            total_value: Self::total_value(key),
            issuer: Issuer {
                name: "Empresa Demonstração LTDA".to_string(),
                cnpj: fields.issuer_cnpj.to_string(),
                state_registration: "123456789".to_string(),
            },
            recipient: Recipient {
                name: "Cliente Demonstração".to_string(),
                document: "12345678901".to_string(),
            },
            status: InvoiceStatus::Authorized,
            xml_url: Some(format!("/api/download/xml/{}", key.as_str())),
            pdf_url: Some(format!("/api/download/pdf/{}", key.as_str())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_KEY: &str = "35200114200166000187550010000000046550000046";

    fn source() -> SimulatedInvoiceSource {
        SimulatedInvoiceSource::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_record_derives_from_key_fields() {
        let key = AccessKey::parse(SAMPLE_KEY).unwrap();
        let record = source().lookup(&key).await.unwrap();

        assert_eq!(record.access_key, SAMPLE_KEY);
        assert_eq!(record.number, "4");
        assert_eq!(record.series, "1");
        assert_eq!(record.issued_at, "01/2020");
        assert_eq!(record.issuer.cnpj, "14200166000187");
        assert_eq!(record.status, InvoiceStatus::Authorized);
        assert_eq!(
            record.pdf_url.as_deref(),
            Some("/api/download/pdf/35200114200166000187550010000000046550000046")
        );
    }

    #[tokio::test]
    async fn test_lookup_is_deterministic() {
        let key = AccessKey::parse(SAMPLE_KEY).unwrap();
        let a = source().lookup(&key).await.unwrap();
        let b = source().lookup(&key).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_total_value_has_two_decimal_places() {
        let key = AccessKey::parse(SAMPLE_KEY).unwrap();
        let record = source().lookup(&key).await.unwrap();
        let (_, decimals) = record.total_value.split_once('.').unwrap();
        assert_eq!(decimals.len(), 2);
    }
}
