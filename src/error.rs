use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Unified error type for the quick-login-admin service.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    // ── Request Errors ──────────────────────────────────────────────────
    #[error("Provider {0} not found")]
    ProviderNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for field: {0}")]
    InvalidField(String),

    // ── Internal ────────────────────────────────────────────────────────
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AdminError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {e}");
        AdminError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(e: serde_json::Error) -> Self {
        AdminError::Internal(e.to_string())
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdminError::ProviderNotFound(_) => StatusCode::NOT_FOUND,
            AdminError::MissingField(_) | AdminError::InvalidField(_) => StatusCode::BAD_REQUEST,
            AdminError::Database(_) | AdminError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = format!(
            "<!DOCTYPE html>\n<html><body><h1>{}</h1><p>{}</p></body></html>",
            status.canonical_reason().unwrap_or("Error"),
            crate::admin::page::esc_html(&self.to_string()),
        );

        (status, Html(body)).into_response()
    }
}
