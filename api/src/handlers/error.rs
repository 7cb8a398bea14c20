//! Domain error to HTTP response mapping.
//!
//! Rejections that stem from an unusable session always read the same
//! (`403 invalid session`) so a caller cannot distinguish an expired token
//! from a revoked or forged one. Infrastructure failures collapse to a
//! generic 500 with no detail leaked.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use tb_core::errors::{AuthError, DomainError, TokenError};
use tb_shared::types::ApiResponse;

/// Converts a domain error into the matching HTTP response.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, message) = status_and_message(error);

    if status.is_server_error() {
        tracing::error!("request failed: {:?}", error);
    } else {
        tracing::debug!("request rejected: {}", error);
    }

    HttpResponse::build(status)
        .json(ApiResponse::<serde_json::Value>::new(status.as_u16(), message))
}

fn status_and_message(error: &DomainError) -> (StatusCode, String) {
    match error {
        DomainError::Auth(auth) => match auth {
            AuthError::Unauthenticated => (StatusCode::FORBIDDEN, "invalid session".to_string()),
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "invalid credentials".to_string())
            }
            AuthError::EmailAlreadyRegistered => {
                (StatusCode::CONFLICT, "email already registered".to_string())
            }
            AuthError::AccountNotFound => (StatusCode::NOT_FOUND, "account not found".to_string()),
            AuthError::PasswordMismatch => {
                (StatusCode::BAD_REQUEST, "passwords do not match".to_string())
            }
        },
        // Token failures only reach a handler when a session could not be
        // established from them, so they read as the uniform rejection.
        DomainError::Token(token) => match token {
            TokenError::GenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
            TokenError::Expired | TokenError::InvalidSignature | TokenError::Malformed => {
                (StatusCode::FORBIDDEN, "invalid session".to_string())
            }
        },
        DomainError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        DomainError::NotFound { resource } => {
            (StatusCode::NOT_FOUND, format!("{} not found", resource))
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        ),
    }
}

/// Domain error wrapper implementing actix's `ResponseError`.
///
/// Lets extractors and handlers bubble domain failures with `?` while the
/// response body still goes through [`handle_domain_error`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_and_message(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}
