//! HTTP middleware

pub mod auth_guard;

pub use auth_guard::auth_guard;
