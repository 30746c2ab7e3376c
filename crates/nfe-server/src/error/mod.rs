use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::{converter::ConvertError, lookup::LookupError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("http client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("upstream rejected: {0}")]
    UpstreamRejected(String),

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound => AppError::NotFound(err.to_string()),
            LookupError::Unavailable(msg) => AppError::UpstreamUnreachable(msg),
        }
    }
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::InvalidInput(msg) => AppError::BadRequest(msg),
            ConvertError::NotAnInvoiceDocument => AppError::BadRequest(err.to_string()),
            ConvertError::UpstreamRejected(msg) => AppError::UpstreamRejected(msg),
            ConvertError::UpstreamUnreachable(msg) => AppError::UpstreamUnreachable(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UpstreamRejected(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::UpstreamUnreachable(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            other => {
                // Detail stays in the logs; the caller gets a generic message.
                tracing::error!("internal error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T, E = AppError> = core::result::Result<T, E>;
