//! Defines the HTTP routes for authentication.
//!
//! Register, login, refresh, and logout live at the top level of the API
//! surface and are integrated into the main Axum router.

use crate::auth::handlers::*;
use axum::{Router, routing::post};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
}
