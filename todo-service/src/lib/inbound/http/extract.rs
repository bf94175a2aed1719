use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use super::handlers::ApiError;

/// JSON body extractor whose rejections render as `{"error": ...}` with 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    }
}
