//! # Catalog Errors
//!
//! Every failure of a resource operation, mapped once to an HTTP status and
//! JSON body at the endpoint boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StorageError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Payload rejected; carries one message per problem
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Edition not found")]
    NotFound,

    /// The highest stored id leaves no room for another
    #[error("No edition id left after {0}")]
    IdsExhausted(u64),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(vec![message.into()])
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::IdsExhausted(_) | CatalogError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            CatalogError::Validation(errors) => json!({ "errors": errors }),
            CatalogError::NotFound => json!({ "error": "Edition not found" }),
            CatalogError::IdsExhausted(max) => {
                error!(max_id = max, "edition id space exhausted");
                json!({ "error": "Internal server error" })
            }
            CatalogError::Storage(err) => {
                error!(error = %err, "edition store failure");
                json!({ "error": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}
