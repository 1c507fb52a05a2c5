//! API error types and responses.
//!
//! Every error kind maps to one HTTP status and one JSON body shape. The
//! shapes are uneven on purpose: missing-id errors report under a `result`
//! key while input and catalog errors report under an `error` key, matching
//! what existing clients parse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use cafe_catalog_store::StoreError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - a form field or query parameter is missing or
    /// uncoercible.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A random pick was requested from an empty catalog.
    #[error("the catalog is empty")]
    EmptyCatalog,

    /// Insert collided with an existing record.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Shared secret mismatch on the delete route.
    #[error("forbidden")]
    Forbidden,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": { "Invalid Input": msg } }),
            ),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "result": { "Error": msg } }),
            ),
            Self::EmptyCatalog => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "Not Found": "The catalog is empty. There is no cafe to return." } }),
            ),
            Self::Conflict(msg) => (
                StatusCode::CONFLICT,
                json!({ "error": { "Conflict": msg } }),
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({ "result": { "Error": "The api key provided is not valid. Action denied." } }),
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": { "Error": "An internal error occurred." } }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => {
                Self::NotFound(format!("Sorry, no cafe with id {id} is in the database."))
            }
            StoreError::EmptyCatalog => Self::EmptyCatalog,
            StoreError::NameTaken { name } => {
                Self::Conflict(format!("A cafe named {name:?} is already in the database."))
            }
            StoreError::Database(msg) => Self::Internal(msg),
        }
    }
}
