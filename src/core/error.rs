use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::constants::{
    MSG_ADDRESS_NOT_FOUND, MSG_DATABASE_ERROR, MSG_INVALID_FORMAT, MSG_MALFORMED_QUERY,
    MSG_NO_ENTRIES, MSG_PROVIDER_ERROR,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Carries the caller-facing message, which differs between create and update
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Address not found by geocoding provider")]
    AddressNotFound,

    #[error("Geocoding provider rejected the query")]
    MalformedQuery,

    #[error("Geocoding provider error: {0}")]
    ProviderError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Domain failures are reported in a 200 body as a plain message;
        // only store and encoding faults surface as 500.
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_DATABASE_ERROR.to_string())
            }
            AppError::BadRequest(ref msg) => {
                tracing::debug!("Rejected request body: {}", msg);
                (StatusCode::OK, MSG_INVALID_FORMAT.to_string())
            }
            AppError::Validation(ref msg) => (StatusCode::OK, msg.clone()),
            AppError::AddressNotFound => (StatusCode::OK, MSG_ADDRESS_NOT_FOUND.to_string()),
            AppError::MalformedQuery => (StatusCode::OK, MSG_MALFORMED_QUERY.to_string()),
            AppError::ProviderError(ref msg) => {
                tracing::warn!("Geocoding provider error: {}", msg);
                (StatusCode::OK, MSG_PROVIDER_ERROR.to_string())
            }
            AppError::NotFound(ref id) => {
                tracing::debug!("No location for id={}", id);
                (StatusCode::OK, MSG_NO_ENTRIES.to_string())
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Failed to encode response: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            message,
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(error: AppError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_domain_failures_are_plain_messages_with_ok_status() {
        let (status, body) = render(AppError::AddressNotFound).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, MSG_ADDRESS_NOT_FOUND);

        let (status, body) = render(AppError::NotFound("missing".to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, MSG_NO_ENTRIES);

        let (status, body) = render(AppError::ProviderError("timeout".to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, MSG_PROVIDER_ERROR);
    }

    #[tokio::test]
    async fn test_store_errors_are_internal_server_errors() {
        let (status, body) = render(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, MSG_DATABASE_ERROR);
    }

    #[tokio::test]
    async fn test_serialization_error_surfaces_underlying_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = err.to_string();
        let (status, body) = render(AppError::Serialization(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, expected);
    }

    #[test]
    fn test_content_type_is_json() {
        let response = AppError::MalformedQuery.into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
