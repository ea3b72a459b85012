//! Cookie-backed session authentication

use std::sync::Arc;

use async_trait::async_trait;
use cookie::{Cookie, SameSite};
use session_core::{User, UserRepository};
use session_shared::{utils::redact_token, AuthType};
use tracing::{debug, info, warn};

use crate::authenticator::Authenticator;
use crate::request::AuthRequest;
use crate::session::{new_session_id, SessionStore};

/// Issues session ids at login, resolves them from the session cookie and
/// forgets them at logout.
pub struct SessionAuthenticator {
    store: Arc<dyn SessionStore>,
    users: Arc<dyn UserRepository>,
    cookie_name: String,
}

impl SessionAuthenticator {
    pub fn new(
        store: Arc<dyn SessionStore>,
        users: Arc<dyn UserRepository>,
        cookie_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            users,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Starts a session for `user_id` and returns its id.
    ///
    /// Absent or empty user ids create nothing.
    pub fn create_session(&self, user_id: Option<&str>) -> Option<String> {
        let user_id = match user_id {
            Some(id) if !id.is_empty() => id,
            _ => {
                debug!("Refusing to create a session without a user id");
                return None;
            }
        };

        let session_id = new_session_id();
        self.store.insert(session_id.clone(), user_id.to_string());
        info!(session = %redact_token(&session_id), user_id, "Session created");
        Some(session_id)
    }

    pub fn user_id_for_session_id(&self, session_id: Option<&str>) -> Option<String> {
        self.store.get(session_id?)
    }

    /// Value of the configured session cookie on `request`.
    pub fn session_cookie(&self, request: Option<&dyn AuthRequest>) -> Option<String> {
        request?.cookie(&self.cookie_name)
    }

    /// `Set-Cookie` value handing `session_id` to the client.
    pub fn login_cookie(&self, session_id: &str) -> String {
        Cookie::build((self.cookie_name.clone(), session_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
            .to_string()
    }

    /// `Set-Cookie` value telling the client to drop its session cookie.
    pub fn logout_cookie(&self) -> String {
        Cookie::build((self.cookie_name.clone(), ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .removal()
            .build()
            .to_string()
    }

    /// Ends the session named by the request's cookie.
    ///
    /// Returns `false` when there is no request, no cookie, or the cookie
    /// does not name a tracked session.
    pub fn destroy_session(&self, request: Option<&dyn AuthRequest>) -> bool {
        let Some(session_id) = self.session_cookie(request) else {
            debug!("Logout without a session cookie");
            return false;
        };
        if self.user_id_for_session_id(Some(&session_id)).is_none() {
            debug!(session = %redact_token(&session_id), "Logout for an unknown session");
            return false;
        }

        // A concurrent logout may have won the race since the lookup.
        match self.store.remove(&session_id) {
            Some(user_id) => {
                info!(session = %redact_token(&session_id), %user_id, "Session destroyed");
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl Authenticator for SessionAuthenticator {
    fn kind(&self) -> AuthType {
        AuthType::SessionAuth
    }

    async fn current_user(&self, request: Option<&dyn AuthRequest>) -> Option<User> {
        let session_id = self.session_cookie(request)?;
        let user_id = self.user_id_for_session_id(Some(&session_id))?;

        match self.users.find_by_id(&user_id).await {
            Ok(user) => {
                if user.is_none() {
                    debug!(%user_id, "Session points at an unknown user");
                }
                user
            }
            Err(e) => {
                warn!(%user_id, "User lookup failed: {}", e);
                None
            }
        }
    }

    fn session_authenticator(&self) -> Option<&SessionAuthenticator> {
        Some(self)
    }
}
