//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lexis_core::{FilterError, StoreError};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InvalidType(String),

    #[error("{0}")]
    NotFound(String),

    #[error("No matching strings found")]
    NoMatch,

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Filter(#[from] FilterError),
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::InvalidType(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_type"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::NoMatch => (StatusCode::NOT_FOUND, "no_match"),
            ApiError::Store(StoreError::AlreadyExists(_)) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Store(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            ApiError::Filter(FilterError::MissingQuery) => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            ApiError::Filter(FilterError::EmptyCorpus) => (StatusCode::NOT_FOUND, "no_data"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
