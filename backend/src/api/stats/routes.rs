//! Defines the HTTP routes for directory statistics.

use super::handlers::{stats, user_stats};
use crate::auth::middleware::require_auth;
use axum::{Router, middleware, routing::get};

pub fn stats_router() -> Router {
    Router::new()
        .route("/stats", get(stats).layer(middleware::from_fn(require_auth)))
        .route(
            "/user-stats",
            get(user_stats).layer(middleware::from_fn(require_auth)),
        )
}
