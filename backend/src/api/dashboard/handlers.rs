//! Handler functions for the protected dashboard endpoint.

use crate::auth::models::AuthIdentity;
use axum::{Json, extract::Extension};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub msg: String,
    /// The authenticated identity, echoed back from the verified token.
    pub user: String,
}

/// Returns the dashboard for the authenticated identity.
#[axum::debug_handler]
pub async fn dashboard(Extension(identity): Extension<AuthIdentity>) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        msg: "Welcome to your dashboard".to_string(),
        user: identity.0,
    })
}
