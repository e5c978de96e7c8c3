use crate::storage::StoreError;
use crate::transport::http::types::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Handler-level failures, rendered as the `{"error": "..."}` envelope.
///
/// The two 400 messages are part of the public contract and asserted by the
/// integration tests; store failures reuse [`StoreError`]'s display.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The path id did not parse as an integer.
    #[error("Invalid recipe ID")]
    InvalidRecipeId,

    /// The request body was not valid JSON for the expected shape.
    #[error("Invalid request payload")]
    InvalidPayload,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRecipeId | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
