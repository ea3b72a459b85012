//! Route table

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use session_shared::constants::API_PREFIX;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, status, users};
use crate::middleware::auth_guard;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/status", get(status::status))
        .route("/auth_session/login", post(auth::login))
        .route("/auth_session/logout", delete(auth::logout))
        .route("/users/me", get(users::me));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
