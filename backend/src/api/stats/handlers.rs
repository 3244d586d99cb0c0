//! Handler functions for directory statistics endpoints.

use crate::auth::models::MessageResponse;
use crate::errors::auth_error_to_http;
use crate::services::stats_service::{StatsResponse, StatsService, UserStatsResponse};
use crate::state::AppState;
use axum::{Json, extract::Extension, http::StatusCode};
use chrono::Utc;

/// Total and verified principal counts from the identity directory.
#[axum::debug_handler]
pub async fn stats(
    Extension(state): Extension<AppState>,
) -> Result<Json<StatsResponse>, (StatusCode, Json<MessageResponse>)> {
    let stats_service = StatsService::new(state.directory.as_ref());

    match stats_service.user_counts().await {
        Ok(response) => Ok(Json(response)),
        Err(error) => Err(auth_error_to_http(error)),
    }
}

/// Signups bucketed by account age.
#[axum::debug_handler]
pub async fn user_stats(
    Extension(state): Extension<AppState>,
) -> Result<Json<UserStatsResponse>, (StatusCode, Json<MessageResponse>)> {
    let stats_service = StatsService::new(state.directory.as_ref());

    match stats_service.signup_buckets(Utc::now()).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => Err(auth_error_to_http(error)),
    }
}
