//! # Session Security
//!
//! Authentication strategies: the permissive default authenticator and the
//! cookie-backed session authenticator, plus the session store they share.

pub mod request;
pub mod session;
pub mod authenticator;
pub mod session_auth;

use std::sync::Arc;

use session_core::UserRepository;
use session_shared::AuthType;

pub use authenticator::{Authenticator, NoAuthenticator};
pub use request::AuthRequest;
pub use session::{MemorySessionStore, SessionStore};
pub use session_auth::SessionAuthenticator;

/// Picks the authentication strategy for the whole process.
///
/// A fresh in-memory store is created for the session strategy; it lives as
/// long as the returned authenticator.
pub fn build_authenticator(
    auth_type: AuthType,
    users: Arc<dyn UserRepository>,
    session_name: &str,
) -> Arc<dyn Authenticator> {
    match auth_type {
        AuthType::SessionAuth => Arc::new(SessionAuthenticator::new(
            Arc::new(MemorySessionStore::new()),
            users,
            session_name,
        )),
        AuthType::None => Arc::new(NoAuthenticator),
    }
}
