//! Invoice issuance data returned by a lookup.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Processing status of an NFe at the tax authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum InvoiceStatus {
    #[serde(rename = "Autorizada")]
    Authorized,
    #[serde(rename = "Cancelada")]
    Cancelled,
    #[serde(rename = "Denegada")]
    Denied,
}

/// Issuing company data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Issuer {
    #[serde(rename = "nome")]
    pub name: String,
    pub cnpj: String,
    /// State registration (inscrição estadual)
    #[serde(rename = "ie")]
    pub state_registration: String,
}

/// Invoice recipient data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipient {
    #[serde(rename = "nome")]
    pub name: String,
    /// CPF (11 digits) or CNPJ (14 digits)
    #[serde(rename = "documento")]
    pub document: String,
}

/// Issuance data for a single NFe.
///
/// Constructed fresh per lookup and never persisted; its only identity is
/// the access key. `numero` and `serie` carry display values with leading
/// zeros stripped, the canonical digits remain inside `chave`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceRecord {
    #[serde(rename = "chave")]
    pub access_key: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "serie")]
    pub series: String,
    /// Emission date derived from the key, `MM/YYYY`
    #[serde(rename = "dataEmissao")]
    pub issued_at: String,
    /// Total value in BRL, two decimal places
    #[serde(rename = "valorTotal")]
    pub total_value: String,
    #[serde(rename = "emitente")]
    pub issuer: Issuer,
    #[serde(rename = "destinatario")]
    pub recipient: Recipient,
    pub status: InvoiceStatus,
    /// Download link for the XML representation, when available
    #[serde(rename = "xmlUrl", skip_serializing_if = "Option::is_none")]
    pub xml_url: Option<String>,
    /// Download link for the DANFE PDF, when available
    #[serde(rename = "pdfUrl", skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> InvoiceRecord {
        InvoiceRecord {
            access_key: "35200114200166000187550010000000046550000046".to_string(),
            number: "4".to_string(),
            series: "1".to_string(),
            issued_at: "01/2020".to_string(),
            total_value: "5490.90".to_string(),
            issuer: Issuer {
                name: "Empresa Demonstração LTDA".to_string(),
                cnpj: "14200166000187".to_string(),
                state_registration: "123456789".to_string(),
            },
            recipient: Recipient {
                name: "Cliente Demonstração".to_string(),
                document: "12345678901".to_string(),
            },
            status: InvoiceStatus::Authorized,
            xml_url: None,
            pdf_url: None,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(
            value["chave"],
            "35200114200166000187550010000000046550000046"
        );
        assert_eq!(value["numero"], "4");
        assert_eq!(value["serie"], "1");
        assert_eq!(value["dataEmissao"], "01/2020");
        assert_eq!(value["valorTotal"], "5490.90");
        assert_eq!(value["emitente"]["nome"], "Empresa Demonstração LTDA");
        assert_eq!(value["emitente"]["ie"], "123456789");
        assert_eq!(value["destinatario"]["documento"], "12345678901");
        assert_eq!(value["status"], "Autorizada");
        // Absent links are omitted, not null
        assert!(value.get("xmlUrl").is_none());
        assert!(value.get("pdfUrl").is_none());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Cancelled).unwrap(),
            "Cancelada"
        );
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Denied).unwrap(),
            "Denegada"
        );
    }
}
