//! Access key lookup handler.

use axum::{extract::State, response::Json};
use nfe_core::AccessKey;

use crate::{
    error::{AppError, Result},
    models::lookup::{LookupRequest, LookupResponse},
    state::AppState,
};

/// Look up NFe issuance data by access key
///
/// Validates the key shape locally before the source is consulted, so a
/// malformed key never costs a backend round trip.
#[utoipa::path(
    post,
    path = "/api/consultar",
    request_body = LookupRequest,
    responses(
        (status = 200, description = "Invoice data found", body = LookupResponse),
        (status = 400, description = "Missing or malformed access key"),
        (status = 404, description = "No invoice for this access key"),
        (status = 500, description = "Lookup backend failure"),
    ),
    tag = "NFe"
)]
pub async fn consult_nfe(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Result<Json<LookupResponse>> {
    if request.access_key.is_empty() {
        return Err(AppError::BadRequest("access key not provided".to_string()));
    }

    let key = AccessKey::parse(&request.access_key)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let nfe_data = state.invoices.lookup(&key).await.map_err(|e| {
        tracing::error!("lookup failed for key {}: {}", key, e);
        AppError::from(e)
    })?;

    Ok(Json(LookupResponse {
        success: true,
        nfe_data: Some(nfe_data),
        message: None,
    }))
}
