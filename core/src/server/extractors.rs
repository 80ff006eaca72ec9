//! Custom axum extractors for request bodies.

use super::error::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejections are rendered as `ApiError`,
/// so malformed bodies get a JSON `{"error": ...}` response.
///
/// A request without a `Content-Type` header is still decoded as JSON.
/// A content type that is present but not JSON is rejected with 415.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(ValidJson(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Rejected(e.status(), e.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(ValidJson(value))
    }
}
