use std::sync::Arc;

use session_core::UserRepository;
use session_security::Authenticator;
use session_shared::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn Authenticator>,
    pub users: Arc<dyn UserRepository>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(auth: Arc<dyn Authenticator>, users: Arc<dyn UserRepository>, config: AppConfig) -> Self {
        Self { auth, users, config }
    }
}
