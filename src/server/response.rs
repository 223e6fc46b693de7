use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::Error;

/// API error that converts to a proper HTTP response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Maps store errors onto the API taxonomy: conflicts become 409s,
/// missing ids 404s, referential failures 400s. Anything else is logged
/// and surfaced as a generic 500 without internal detail.
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { .. } => ApiError::not_found(err.to_string()),
            Error::Conflict(message) => ApiError::conflict(message),
            Error::ForeignKey(message) => ApiError::bad_request(message),
            other => {
                tracing::error!("storage error: {other}");
                ApiError::internal("internal server error")
            }
        }
    }
}

/// Extension for Option types from store lookups.
pub trait StoreOptionExt<T> {
    fn or_not_found(self, entity: &'static str, id: i64) -> Result<T, ApiError>;
}

impl<T> StoreOptionExt<T> for Option<T> {
    fn or_not_found(self, entity: &'static str, id: i64) -> Result<T, ApiError> {
        self.ok_or_else(|| Error::not_found(entity, id).into())
    }
}
