//! # Session API
//!
//! HTTP handlers, auth guard middleware, response envelope and router.

pub mod handlers;
pub mod middleware;
pub mod error;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
