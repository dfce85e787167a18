use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// This is the single translation point from the internal error taxonomy to
/// HTTP status + JSON error body. Handlers never map errors themselves.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown asset type: {0}")]
    UnknownAssetType(String),

    #[error("Unknown advisor type: {0}")]
    UnknownAdvisorType(String),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::UnknownAssetType(_) | AppError::UnknownAdvisorType(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Llm(LlmError::RateLimited) => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limits exceeded, please try again later.".to_string(),
            ),
            AppError::Llm(LlmError::Auth) => (
                StatusCode::UNAUTHORIZED,
                "AI service authentication error. Please check your API key.".to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
