//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use remark_core::error::{DomainError, ValidationError};
use remark_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Route not found")]
    RouteNotFound,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Domain(DomainError::NotFound { .. }) | AppError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Domain(DomainError::Storage(_) | DomainError::Internal(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Domain(DomainError::Validation(reason)) => {
                tracing::debug!(%reason, "Request rejected");
                ErrorResponse::bad_request(reason.to_string())
            }
            AppError::Domain(err @ DomainError::NotFound { entity_type, id }) => {
                tracing::debug!(entity = entity_type, id, "Lookup missed");
                ErrorResponse::not_found(err.to_string())
            }
            AppError::RouteNotFound => ErrorResponse::not_found(self.to_string()),
            AppError::Domain(err) => {
                // Storage details stay in the logs.
                tracing::error!(error = %err, "Request failed");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
