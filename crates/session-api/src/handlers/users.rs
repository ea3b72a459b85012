//! User HTTP handlers

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;
use session_core::User;
use session_security::AuthRequest;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// User DTO for responses
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            display_name: user.display_name(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// Current user handler - GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let request: &dyn AuthRequest = &headers;
    let user = state
        .auth
        .current_user(Some(request))
        .await
        .ok_or_else(|| ApiError::NotFound("No authenticated user".to_string()))?;

    Ok(Json(ApiResponse::success(UserDto::from(&user))))
}
