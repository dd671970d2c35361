//! Error handling middleware - RFC 7807 compliant responses.
//!
//! Each variant carries the underlying cause. The cause is logged when the
//! response is built and never sent to the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quire_core::DomainError;
use quire_core::error::RepoError;
use quire_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(cause) => write!(f, "Not found: {}", cause),
            AppError::BadRequest(cause) => write!(f, "Bad request: {}", cause),
            AppError::Internal(cause) => write!(f, "Internal error: {}", cause),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(cause) => {
                tracing::warn!(%cause, "Not found");
                ErrorResponse::not_found()
            }
            AppError::BadRequest(cause) => {
                tracing::warn!(%cause, "Bad request");
                ErrorResponse::bad_request()
            }
            AppError::Internal(cause) => {
                tracing::error!(%cause, "Internal error");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            // Malformed ids are indistinguishable from missing rows.
            DomainError::InvalidId(raw) => AppError::NotFound(format!("invalid id {:?}", raw)),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Internal(format!("Constraint violation: {}", msg)),
            RepoError::Connection(msg) => AppError::Internal(format!("Database connection error: {}", msg)),
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
