use nfe_core::InvoiceRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for an access key lookup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LookupRequest {
    /// 44-digit NFe access key
    #[serde(rename = "chaveAcesso")]
    pub access_key: String,
}

/// Response envelope for a lookup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(rename = "nfeData", skip_serializing_if = "Option::is_none")]
    pub nfe_data: Option<InvoiceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
