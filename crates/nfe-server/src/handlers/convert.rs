//! XML to DANFE conversion handler.

use axum::{extract::State, response::Json};

use crate::{
    error::Result,
    models::convert::{ConvertRequest, ConvertResponse},
    services::converter,
    state::AppState,
};

/// Convert an NFe XML document into a base64-encoded DANFE PDF
#[utoipa::path(
    post,
    path = "/api/converter",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Document converted", body = ConvertResponse),
        (status = 400, description = "Missing or unrecognizable XML content"),
        (status = 500, description = "Conversion service failure"),
    ),
    tag = "NFe"
)]
pub async fn convert_nfe(
    State(state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>> {
    // Fail fast on content that is obviously not an invoice; the remote
    // call is only spent on plausible documents.
    converter::validate_payload(&request.xml_content)?;

    let pdf_base64 = state
        .converter
        .convert(&request.xml_content)
        .await
        .map_err(|e| {
            tracing::error!("conversion failed: {}", e);
            e
        })?;

    Ok(Json(ConvertResponse {
        success: true,
        pdf_base64: Some(pdf_base64),
        message: None,
    }))
}
