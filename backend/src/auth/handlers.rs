//! Handler functions for authentication-related API endpoints.
//!
//! These handlers parse request data, call into `auth::service` for the core
//! logic, and own the refresh-cookie contract: the refresh token travels only
//! in an HTTP-only, secure, cross-site-capable cookie and never appears in a
//! response body.

use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::errors::auth_error_to_http;
use crate::state::AppState;
use crate::utils::jwt::REFRESH_TOKEN_TTL_SECS;
use axum::{
    Json,
    extract::Extension,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::IntoResponse,
};

const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    match auth_service.register(payload).await {
        Ok(()) => Ok(Json(MessageResponse::new("Registered successfully"))),
        Err(error) => Err(auth_error_to_http(error)),
    }
}

/// Handle user login request
///
/// On success the access token is returned in the body and the refresh token
/// is set as the `refreshToken` cookie.
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<MessageResponse>)> {
    let auth_service = AuthService::new(&state);

    let session = match auth_service.login(payload).await {
        Ok(session) => session,
        Err(error) => return Err(auth_error_to_http(error)),
    };

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, refresh_cookie(&session.refresh_token)?);

    Ok((
        headers,
        Json(AccessTokenResponse {
            access_token: session.access_token,
        }),
    ))
}

/// Handle token refresh request
///
/// Reads only the refresh cookie; no body credentials are accepted. A missing
/// cookie is 401, an invalid or expired one is 403.
#[axum::debug_handler]
pub async fn refresh(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccessTokenResponse>, (StatusCode, Json<MessageResponse>)> {
    let Some(refresh_token) = extract_refresh_cookie(&headers) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new("No refresh token")),
        ));
    };

    let auth_service = AuthService::new(&state);
    match auth_service.refresh(&refresh_token) {
        Ok(response) => Ok(Json(response)),
        Err(error) => Err(auth_error_to_http(error)),
    }
}

/// Handle logout request
///
/// Clears the refresh cookie. Access tokens already issued stay valid until
/// their own expiry; the stateless design has nothing server-side to revoke.
#[axum::debug_handler]
pub async fn logout() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, clear_refresh_cookie());

    (headers, Json(MessageResponse::new("Logged out")))
}

/// Build the refresh token cookie.
///
/// HTTP-only keeps it away from client script; SameSite=None plus Secure makes
/// it cross-site-sendable for browser clients on another origin.
fn refresh_cookie(token: &str) -> Result<HeaderValue, (StatusCode, Json<MessageResponse>)> {
    let cookie = format!(
        "{REFRESH_COOKIE_NAME}={token}; Path=/; HttpOnly; Secure; SameSite=None; Max-Age={REFRESH_TOKEN_TTL_SECS}"
    );
    HeaderValue::from_str(&cookie).map_err(|e| {
        tracing::error!("Failed to build refresh cookie: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse::new("Internal server error")),
        )
    })
}

fn clear_refresh_cookie() -> HeaderValue {
    HeaderValue::from_static("refreshToken=; Path=/; HttpOnly; Secure; SameSite=None; Max-Age=0")
}

fn extract_refresh_cookie(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == REFRESH_COOKIE_NAME && !val.is_empty() {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_refresh_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; refreshToken=abc.def.ghi; lang=en"),
        );
        assert_eq!(
            extract_refresh_cookie(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_refresh_cookie(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("refreshToken="));
        assert_eq!(extract_refresh_cookie(&headers), None);
    }

    #[test]
    fn refresh_cookie_carries_contract_attributes() {
        let value = refresh_cookie("tok").unwrap();
        let value = value.to_str().unwrap();
        assert!(value.starts_with("refreshToken=tok"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Secure"));
        assert!(value.contains("SameSite=None"));
        assert!(value.contains("Max-Age=604800"));
    }
}
