//! Defines the HTTP routes for user administration.

use super::handlers::delete_user;
use crate::auth::middleware::require_auth;
use axum::{Router, middleware, routing::delete};

pub fn user_router() -> Router {
    Router::new().route(
        "/users/{id}",
        delete(delete_user).layer(middleware::from_fn(require_auth)),
    )
}
