//! Main entry point for the Gatehouse backend.
//!
//! Initializes the Axum web server, sets up the database connection and the
//! collaborator implementations, and registers all API routes and middleware.

use axum::http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use gatehouse::api;
use gatehouse::config::Config;
use gatehouse::database::Database;
use gatehouse::repositories::credential_repository::SqliteCredentialStore;
use gatehouse::repositories::directory_repository::SqliteIdentityDirectory;
use gatehouse::state::AppState;
use gatehouse::utils::jwt::TokenService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();

    let state = AppState::new(
        TokenService::new(&config.jwt_secret),
        Arc::new(SqliteCredentialStore::new(pool.clone())),
        Arc::new(SqliteIdentityDirectory::new(pool)),
    );

    let mut app = api::router(state);

    // The refresh cookie is SameSite=None, so browser clients on another
    // origin need a credentialed CORS policy naming that origin.
    if let Some(origin) = &config.cors_allowed_origin {
        let cors = CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .allow_credentials(true);
        app = app.layer(cors);
    }

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting Gatehouse server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}
