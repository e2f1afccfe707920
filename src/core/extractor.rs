use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor that decodes regardless of the request's content type
/// and reports failures through `AppError`
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppJsonRejection(format!("Failed to read request body: {}", e)))?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(|e| AppJsonRejection(format!("Invalid JSON: {}", e)))
    }
}

pub struct AppJsonRejection(String);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::BadRequest(self.0).into_response()
    }
}
