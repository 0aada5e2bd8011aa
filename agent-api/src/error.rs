//! Request failure type and its HTTP mapping.

use agent_schema::ValidationError;
use agent_store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failures a request can surface to the client.
///
/// The mapping keeps the error taxonomy intact so clients can distinguish
/// "fix your input" (validation, conflict, not-found) from "try again later"
/// (storage failure).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted document failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected or could not complete the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An update body disagreed with the path it was submitted to.
    #[error("body name `{body}` does not match path name `{path}`")]
    NameMismatch {
        /// Name taken from the request path.
        path: String,
        /// Name found in the request body.
        body: String,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::NameMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Backend { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::NameMismatch { .. } => "validation_error",
            Self::Store(StoreError::Conflict { .. }) => "conflict",
            Self::Store(StoreError::NotFound { .. }) => "not_found",
            Self::Store(StoreError::Backend { .. }) => "storage_failure",
        }
    }

    fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => err.field(),
            Self::NameMismatch { .. } => Some("name"),
            Self::Store(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(StoreError::Backend { .. })) {
            tracing::error!(error = %self, "storage failure");
        }
        let body = ErrorBody {
            status: self.category(),
            message: self.to_string(),
            field: self.field(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
