//! Data structures for authentication-related entities.
//!
//! Request payloads, wire responses, and the per-request authenticated
//! identity attached by the session middleware.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Plain message body used for confirmations and error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Access token returned by login and refresh
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Both tokens minted at login. The refresh token never reaches a response
/// body; it is set as an HTTP-only cookie by the login handler.
#[derive(Debug)]
pub struct IssuedSession {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authenticated identity attached to request extensions by the session
/// middleware on successful verification.
#[derive(Debug, Clone)]
pub struct AuthIdentity(pub String);
