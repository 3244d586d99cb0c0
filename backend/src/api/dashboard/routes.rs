//! Defines the HTTP route for the protected dashboard.

use super::handlers::dashboard;
use crate::auth::middleware::require_auth;
use axum::{Router, middleware, routing::get};

pub fn dashboard_router() -> Router {
    Router::new().route(
        "/dashboard",
        get(dashboard).layer(middleware::from_fn(require_auth)),
    )
}
