//! Handler functions for user administration endpoints.

use crate::auth::models::{AuthIdentity, MessageResponse};
use crate::errors::auth_error_to_http;
use crate::services::user_service::UserService;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};

/// Deletes a user by identity (email).
#[axum::debug_handler]
pub async fn delete_user(
    Extension(identity): Extension<AuthIdentity>,
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    tracing::info!("Deleting user '{}' requested by '{}'", id, identity.0);

    let user_service = UserService::new(state.credentials.as_ref(), state.directory.as_ref());

    match user_service.delete_user(&id).await {
        Ok(()) => Ok(Json(MessageResponse::new("User deleted"))),
        Err(error) => Err(auth_error_to_http(error)),
    }
}
