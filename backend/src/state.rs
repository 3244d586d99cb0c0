//! Shared application state injected into handlers and middleware.

use crate::repositories::{CredentialStore, IdentityDirectory};
use crate::utils::jwt::TokenService;
use std::sync::Arc;

/// Collaborator handles plus the token service, built once at startup and
/// injected through an `Extension` layer. The token service is pure and the
/// collaborators are behind trait objects, so cloning is cheap and handlers
/// never touch process globals.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub credentials: Arc<dyn CredentialStore>,
    pub directory: Arc<dyn IdentityDirectory>,
}

impl AppState {
    pub fn new(
        tokens: TokenService,
        credentials: Arc<dyn CredentialStore>,
        directory: Arc<dyn IdentityDirectory>,
    ) -> Self {
        Self {
            tokens: Arc::new(tokens),
            credentials,
            directory,
        }
    }
}
