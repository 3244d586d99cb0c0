//! JWT token utilities for authentication and authorization.
//!
//! Provides creation and validation of the two token classes (access and
//! refresh). Both are signed with the same secret and algorithm; only the
//! expiry differs. Tokens are self-contained: validity is entirely determined
//! by signature and embedded expiry, with no server-side session state.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AuthError;

/// Access tokens prove recent authentication and are attached per request.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;
/// Refresh tokens live in an HTTP-only cookie and only mint new access tokens.
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims carried by both token classes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Identity (email) of the authenticated principal
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// Typed verification failure for untrusted token input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// Not parseable as a JWT, or signed with a different secret.
    #[error("malformed token")]
    Malformed,
    /// Signature valid but the expiry has elapsed.
    #[error("token has expired")]
    Expired,
}

impl From<VerificationError> for AuthError {
    fn from(_: VerificationError) -> Self {
        AuthError::Forbidden
    }
}

/// Mints and validates signed, time-bounded tokens.
///
/// Pure once constructed: no I/O, no shared mutable state, so concurrent
/// issuances and verifications never interact. Built once at startup from the
/// configured secret and shared through [`crate::state::AppState`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: a token is expired the second its exp elapses.
        validation.leeway = 0;

        TokenService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a short-lived access token for an identity.
    pub fn issue_access_token(&self, identity: &str) -> Result<String, AuthError> {
        self.issue(identity, Duration::seconds(ACCESS_TOKEN_TTL_SECS))
    }

    /// Issues a long-lived refresh token for an identity.
    pub fn issue_refresh_token(&self, identity: &str) -> Result<String, AuthError> {
        self.issue(identity, Duration::seconds(REFRESH_TOKEN_TTL_SECS))
    }

    /// Checks signature and expiry, returning the embedded identity.
    ///
    /// Never panics for untrusted input: any failure comes back as a typed
    /// [`VerificationError`].
    pub fn verify_token(&self, token: &str) -> Result<String, VerificationError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => VerificationError::Expired,
                _ => VerificationError::Malformed,
            })
    }

    fn issue(&self, identity: &str, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.to_string(),
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Upstream { source: e.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn access_token_round_trips_identity() {
        let tokens = TokenService::new(SECRET);
        let token = tokens.issue_access_token("a@x.com").unwrap();
        assert_eq!(tokens.verify_token(&token).unwrap(), "a@x.com");
    }

    #[test]
    fn refresh_token_round_trips_identity() {
        let tokens = TokenService::new(SECRET);
        let token = tokens.issue_refresh_token("b@x.com").unwrap();
        assert_eq!(tokens.verify_token(&token).unwrap(), "b@x.com");
    }

    #[test]
    fn expired_token_is_expired_not_malformed() {
        let tokens = TokenService::new(SECRET);
        let token = tokens.issue("a@x.com", Duration::seconds(-120)).unwrap();
        assert_eq!(
            tokens.verify_token(&token).unwrap_err(),
            VerificationError::Expired
        );
    }

    #[test]
    fn token_signed_with_other_secret_is_malformed() {
        let tokens = TokenService::new(SECRET);
        let other = TokenService::new("another-secret");
        let token = other.issue_access_token("a@x.com").unwrap();
        assert_eq!(
            tokens.verify_token(&token).unwrap_err(),
            VerificationError::Malformed
        );
    }

    #[test]
    fn garbage_input_is_malformed() {
        let tokens = TokenService::new(SECRET);
        assert_eq!(
            tokens.verify_token("not.a.token").unwrap_err(),
            VerificationError::Malformed
        );
        assert_eq!(
            tokens.verify_token("").unwrap_err(),
            VerificationError::Malformed
        );
    }
}
