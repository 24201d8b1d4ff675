//! Unified error types for the tl;dr news API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `StorageError`: Summary store errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Summary store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(key)) => {
                tracing::debug!("Not found: {}", key);
                (StatusCode::NOT_FOUND, "Not found", None)
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Storage(e)) => {
                tracing::error!("Storage error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error", None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
