use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newsrag::StoreError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within
/// the server, allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// Errors originating from the document store.
    Store(StoreError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Store(err) => {
                error!("StoreError: {:?}", err);
                match err {
                    StoreError::EmbeddingRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to embeddings API failed: {e}"),
                    ),
                    StoreError::EmbeddingResponse(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to deserialize embeddings API response: {e}"),
                    ),
                    StoreError::EmbeddingApi(e) => {
                        (StatusCode::BAD_GATEWAY, format!("Embeddings API error: {e}"))
                    }
                    other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
