use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

/// GET /api/v1/status
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}
