// ============================================================================
// Session API - Auth Handlers
// File: crates/session-api/src/handlers/auth.rs
// ============================================================================
//! Session login and logout handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use session_security::{AuthRequest, SessionAuthenticator};
use session_shared::utils::mask_email;
use tracing::info;

use crate::error::ApiError;
use crate::handlers::users::UserDto;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login request payload.
///
/// Credentials are checked upstream; this endpoint only receives the id of
/// the user that was authenticated.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

fn sessions(state: &AppState) -> Result<&SessionAuthenticator, ApiError> {
    state
        .auth
        .session_authenticator()
        .ok_or_else(|| ApiError::NotFound("Session authentication is not enabled".to_string()))
}

/// Login handler - POST /api/v1/auth_session/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let sessions = sessions(&state)?;
    let Json(payload) = payload?;

    let user_id = payload
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("user_id missing".to_string()))?;

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("no user found for this id".to_string()))?;

    let session_id = sessions
        .create_session(Some(&user.id))
        .ok_or_else(|| ApiError::InternalError("Failed to create session".to_string()))?;

    info!(
        user_id = %user.id,
        email = %user.email.as_deref().map(mask_email).unwrap_or_default(),
        "Login successful"
    );

    Ok((
        [(header::SET_COOKIE, sessions.login_cookie(&session_id))],
        Json(ApiResponse::success(UserDto::from(&user))),
    )
        .into_response())
}

/// Logout handler - DELETE /api/v1/auth_session/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let sessions = sessions(&state)?;

    let request: &dyn AuthRequest = &headers;
    if !sessions.destroy_session(Some(request)) {
        return Err(ApiError::NotFound("No active session".to_string()));
    }

    Ok((
        [(header::SET_COOKIE, sessions.logout_cookie())],
        Json(ApiResponse::success(serde_json::json!({}))),
    )
        .into_response())
}
