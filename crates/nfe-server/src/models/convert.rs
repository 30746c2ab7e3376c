use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for an XML to DANFE conversion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Raw NFe XML text
    #[serde(rename = "xmlContent")]
    pub xml_content: String,
}

/// Response envelope for a conversion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    pub success: bool,
    /// Converted document, base64-encoded, exactly as produced upstream
    #[serde(rename = "pdfBase64", skip_serializing_if = "Option::is_none")]
    pub pdf_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
