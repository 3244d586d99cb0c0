//! HTTP surface: route modules and the assembled application router.

use crate::auth;
use crate::state::AppState;
use axum::{Extension, Router};

pub mod dashboard;
pub mod stats;
pub mod user;

/// Assembles the full application router with the shared state installed.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(auth::routes::auth_router())
        .merge(dashboard::routes::dashboard_router())
        .merge(stats::routes::stats_router())
        .merge(user::routes::user_router())
        .layer(Extension(state))
}
