//! DANFE conversion gateways.

use std::time::Duration;

use async_trait::async_trait;
use nfe_core::xml::looks_like_nfe;
use reqwest::Client as HttpClient;
use thiserror::Error;

use crate::settings::ConverterCfg;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Conversion failure taxonomy.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Local precondition failed; no remote call was made
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Content sniff failed: no NFe root element marker
    #[error("the file does not look like a valid NFe XML document")]
    NotAnInvoiceDocument,

    /// The conversion service answered with an error; its message is
    /// propagated opaquely and never retried
    #[error("conversion service rejected the document: {0}")]
    UpstreamRejected(String),

    /// The conversion service could not be reached in time
    #[error("conversion service unreachable: {0}")]
    UpstreamUnreachable(String),
}

/// Converts raw NFe XML into a printable DANFE document.
///
/// The returned string is the upstream response body verbatim,
/// conventionally a base64-encoded PDF, treated as opaque here.
#[async_trait]
pub trait DanfeConverter: Send + Sync {
    async fn convert(&self, xml: &str) -> Result<String, ConvertError>;
}

/// Local preconditions, checked before any remote call is spent.
pub fn validate_payload(xml: &str) -> Result<(), ConvertError> {
    if xml.is_empty() {
        return Err(ConvertError::InvalidInput(
            "XML content not provided".to_string(),
        ));
    }
    if !looks_like_nfe(xml) {
        return Err(ConvertError::NotAnInvoiceDocument);
    }
    Ok(())
}

/// HTTP client for the MeuDanfe conversion API.
///
/// Posts the raw XML as a plain-text body and relays the response body
/// untouched. Transport failures are retried with doubling backoff up to a
/// configured bound; rejections are not, since retrying a content problem
/// will not help.
pub struct MeuDanfeClient {
    http: HttpClient,
    endpoint: String,
    retry_attempts: u32,
}

impl MeuDanfeClient {
    pub fn new(cfg: &ConverterCfg) -> crate::error::Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            retry_attempts: cfg.retry_attempts,
        })
    }
}

#[async_trait]
impl DanfeConverter for MeuDanfeClient {
    async fn convert(&self, xml: &str) -> Result<String, ConvertError> {
        let attempts = self.retry_attempts.max(1);
        let mut delay = INITIAL_BACKOFF;

        for attempt in 0..attempts {
            match self
                .http
                .post(&self.endpoint)
                .header("content-type", "text/plain")
                .body(xml.to_string())
                .send()
                .await
            {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.text().await.map_err(|e| {
                            ConvertError::UpstreamUnreachable(format!(
                                "reading response body: {e}"
                            ))
                        });
                    }
                    let body = resp.text().await.unwrap_or_default();
                    return Err(ConvertError::UpstreamRejected(format!("{status}: {body}")));
                }
                Err(e) if attempt + 1 < attempts => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        error = %e,
                        retry_in = ?delay,
                        "conversion service unreachable, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => return Err(ConvertError::UpstreamUnreachable(e.to_string())),
            }
        }

        Err(ConvertError::UpstreamUnreachable(
            "exhausted retries".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_payload_rejects_empty_input() {
        match validate_payload("") {
            Err(ConvertError::InvalidInput(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_payload_rejects_non_invoice_xml() {
        match validate_payload("<NotAnInvoice/>") {
            Err(ConvertError::NotAnInvoiceDocument) => {}
            other => panic!("expected NotAnInvoiceDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_payload_accepts_nfe_xml() {
        assert!(validate_payload("<NFe><infNFe/></NFe>").is_ok());
    }
}
