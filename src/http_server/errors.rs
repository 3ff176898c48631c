//! # HTTP API Errors
//!
//! Error types for the user endpoints. Every error maps to an HTTP status
//! code and a `{"message": ...}` body. Store failures are logged and
//! reported as a generic server error without leaking details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A record with the requested email already exists
    #[error("Email already exists")]
    DuplicateEmail,

    /// Lookup, update, or delete target is missing
    #[error("User not found")]
    NotFound,

    /// Age filter matched no records
    #[error("No users found with the specified minimum age")]
    NoUsersMatchFilter,

    /// Path id is not a valid numeric identifier
    #[error("Invalid user id: {0}")]
    InvalidId(String),

    /// minAge query parameter is not a valid number
    #[error("Invalid minAge parameter: {0}")]
    InvalidMinAge(String),

    /// Required query parameter is absent
    #[error("Missing required query parameter: {0}")]
    MissingParam(&'static str),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage read/write failure
    #[error("Internal server error")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidMinAge(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NoUsersMatchFilter => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Short-message response body, used for errors and the route fallback
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(ref err) = self {
            Logger::error("STORE_FAILURE", &[("detail", &err.to_string())]);
        }

        let status = self.status_code();
        let body = Json(MessageResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
