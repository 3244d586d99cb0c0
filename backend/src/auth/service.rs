//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::database::models::NewCredential;
use crate::errors::{AuthError, AuthResult};
use crate::repositories::CredentialStore;
use crate::state::AppState;
use crate::utils::jwt::TokenService;
use bcrypt::{DEFAULT_COST, hash, verify};
use validator::Validate;

const DEFAULT_ROLE: &str = "user";

/// Authentication service handling registration, login, and token refresh
/// over the injected credential store and token service.
pub struct AuthService<'a> {
    tokens: &'a TokenService,
    credentials: &'a dyn CredentialStore,
}

impl<'a> AuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        AuthService {
            tokens: &state.tokens,
            credentials: state.credentials.as_ref(),
        }
    }

    /// Registers a new identity with a hashed password.
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<()> {
        validate_request(&request)?;

        let password_hash = Self::hash_password(&request.password)?;
        let created = self
            .credentials
            .create(NewCredential {
                email: request.email.clone(),
                password_hash,
                role: DEFAULT_ROLE.to_string(),
            })
            .await?;

        if !created {
            return Err(AuthError::conflict(request.email));
        }

        Ok(())
    }

    /// Authenticates an identity and mints both token classes.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<IssuedSession> {
        validate_request(&request)?;

        // Unknown identity and wrong password are indistinguishable on the
        // wire so login cannot be used to probe for registered emails.
        let record = self
            .credentials
            .find_by_identity(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !Self::verify_password(&request.password, &record.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(IssuedSession {
            access_token: self.tokens.issue_access_token(&record.email)?,
            refresh_token: self.tokens.issue_refresh_token(&record.email)?,
        })
    }

    /// Exchanges a valid refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated; the identity comes solely from
    /// the verified token, never from client-supplied request data.
    pub fn refresh(&self, refresh_token: &str) -> AuthResult<AccessTokenResponse> {
        let identity = self.tokens.verify_token(refresh_token)?;
        let access_token = self.tokens.issue_access_token(&identity)?;

        Ok(AccessTokenResponse { access_token })
    }

    fn hash_password(password: &str) -> AuthResult<String> {
        hash(password, DEFAULT_COST).map_err(|e| AuthError::Upstream { source: e.into() })
    }

    fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
        verify(password, hash).map_err(|e| AuthError::Upstream { source: e.into() })
    }
}

/// Flattens validator errors into a single validation message.
fn validate_request<T: Validate>(request: &T) -> AuthResult<()> {
    if let Err(validation_errors) = request.validate() {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();
        return Err(AuthError::validation(error_messages.join(", ")));
    }

    Ok(())
}
