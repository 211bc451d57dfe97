pub mod blogs;
pub mod login;
pub mod users;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::token::TokenError;

/// Request-level error taxonomy. Every handler failure flows through one of
/// these variants; nothing escapes unhandled.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Auth(String),
    /// Covers both an id that does not parse and an id that resolves to
    /// nothing. The two cases share a status and message.
    #[error("malformatted id")]
    MalformattedId,
    #[error("something went wrong...")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::MalformattedId => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(err) => {
                // Log the detail server-side; the client gets the generic
                // message only.
                tracing::error!(error = %err, "Unexpected failure while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::Auth(err.to_string())
    }
}
