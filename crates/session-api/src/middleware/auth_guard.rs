//! Route protection driven by `Authenticator::requires_auth`

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use session_security::AuthRequest;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects requests to protected paths that carry no credentials (401) or
/// whose credentials resolve to no user (403).
///
/// Whether a path is protected is decided by the configured authenticator;
/// both shipped strategies leave every path open.
pub async fn auth_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();
    if !state.auth.requires_auth(Some(&path), &state.config.auth.excluded_paths) {
        return Ok(next.run(request).await);
    }

    {
        let view: &dyn AuthRequest = request.headers();
        let session_cookie = state
            .auth
            .session_authenticator()
            .and_then(|sessions| sessions.session_cookie(Some(view)));

        if state.auth.authorization_header(Some(view)).is_none() && session_cookie.is_none() {
            return Err(ApiError::Unauthorized(format!("No credentials for {}", path)));
        }

        if state.auth.current_user(Some(view)).await.is_none() {
            return Err(ApiError::Forbidden(format!("No user for credentials on {}", path)));
        }
    }

    debug!(%path, "Authenticated request");
    Ok(next.run(request).await)
}
