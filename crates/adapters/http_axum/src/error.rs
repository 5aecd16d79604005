//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use syncpart_domain::error::SyncPartError;

/// Maps [`SyncPartError`] to a plain-text HTTP response.
///
/// The 400 and 404 bodies reuse the error's own `Display` text, which is
/// fixed by contract (`Missing identifier parameter`,
/// `Identifier {identifier} is unknown`). Lookup failures are surfaced as an
/// opaque 500 and logged; they are never reinterpreted as not-found.
pub struct ApiError(SyncPartError);

impl From<SyncPartError> for ApiError {
    fn from(err: SyncPartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SyncPartError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SyncPartError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SyncPartError::Lookup(err) => {
                tracing::error!(error = %err, "content lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
