//! Middleware for protecting authenticated routes.
//!
//! Per-request state machine: extract the bearer token (absent maps to 401),
//! verify it (malformed or expired maps to 403), then admit by attaching the
//! decoded identity to the request extensions. No retries and no implicit
//! refresh happen here; refreshing is an explicit client operation against
//! `/refresh`.

use crate::auth::models::{AuthIdentity, MessageResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Request},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// Session middleware gating protected routes.
pub async fn require_auth(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<MessageResponse>)> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let token = match auth_header.and_then(|value| value.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(MessageResponse::new("No token provided")),
            ));
        }
    };

    match state.tokens.verify_token(token) {
        Ok(identity) => {
            request.extensions_mut().insert(AuthIdentity(identity));
            Ok(next.run(request).await)
        }
        Err(_) => Err((
            StatusCode::FORBIDDEN,
            Json(MessageResponse::new("Invalid or expired token")),
        )),
    }
}
