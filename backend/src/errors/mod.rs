//! Global application error types and handlers.
//!
//! This module defines the error taxonomy used across the backend and the
//! mapping from domain errors to HTTP responses. Token verification failures
//! are never escalated to process-fatal errors; they map deterministically to
//! 401/403 responses.

use crate::auth::models::MessageResponse;
use axum::{Json, http::StatusCode};
use thiserror::Error;

/// Domain error for the authentication backend.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential was presented at all.
    #[error("no credential presented")]
    Unauthenticated,

    /// A credential was presented but is invalid or expired.
    #[error("credential invalid or expired")]
    Forbidden,

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    /// Duplicate registration for an identity that already exists.
    #[error("user already exists: {identity}")]
    Conflict { identity: String },

    /// Unknown identity or wrong password on login.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("validation error: {message}")]
    Validation { message: String },

    /// Collaborator I/O failure (credential store, identity directory).
    #[error("upstream failure: {source}")]
    Upstream {
        #[from]
        source: anyhow::Error,
    },
}

pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn conflict(identity: impl Into<String>) -> Self {
        Self::Conflict {
            identity: identity.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Converts an [`AuthError`] to its HTTP response.
///
/// Duplicate registration maps to 400 rather than 409: the response contract
/// for `/register` pins `400 {"msg": "User exists"}`. Upstream failures are
/// logged here and surfaced as a generic 500 without internal detail.
pub fn auth_error_to_http(error: AuthError) -> (StatusCode, Json<MessageResponse>) {
    let (status, msg) = match error {
        AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, "No token provided".to_string()),
        AuthError::Forbidden => (StatusCode::FORBIDDEN, "Invalid or expired token".to_string()),
        AuthError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
        ),
        AuthError::Conflict { .. } => (StatusCode::BAD_REQUEST, "User exists".to_string()),
        AuthError::InvalidCredentials => {
            (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
        }
        AuthError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        AuthError::Upstream { source } => {
            tracing::error!("Upstream failure: {source:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(MessageResponse { msg }))
}
