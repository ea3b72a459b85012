//! Authentication contract consumed by request handlers

use async_trait::async_trait;
use session_core::User;
use session_shared::{constants::AUTHORIZATION_HEADER, AuthType};

use crate::request::AuthRequest;
use crate::session_auth::SessionAuthenticator;

/// Strategy every authentication scheme implements.
///
/// The provided methods are the permissive defaults: nothing is enforced and
/// no request resolves to a user. None of these methods fail; a miss is
/// reported as `None` or `false`.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> AuthType;

    /// Whether `path` must be authenticated given the exempt `excluded_paths`.
    ///
    /// Neither shipped strategy enforces authentication, so this stays `false`.
    fn requires_auth(&self, path: Option<&str>, excluded_paths: &[String]) -> bool {
        let _ = (path, excluded_paths);
        false
    }

    /// Raw `Authorization` header value.
    fn authorization_header(&self, request: Option<&dyn AuthRequest>) -> Option<String> {
        request?.header(AUTHORIZATION_HEADER)
    }

    async fn current_user(&self, request: Option<&dyn AuthRequest>) -> Option<User> {
        let _ = request;
        None
    }

    /// Session capability, present only on the session strategy.
    fn session_authenticator(&self) -> Option<&SessionAuthenticator> {
        None
    }
}

/// Default strategy: every route is public and nobody is logged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthenticator;

#[async_trait]
impl Authenticator for NoAuthenticator {
    fn kind(&self) -> AuthType {
        AuthType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};

    #[tokio::test]
    async fn test_default_authenticator_is_permissive() {
        let auth = NoAuthenticator;
        let excluded = vec!["/api/v1/status/".to_string()];

        assert!(!auth.requires_auth(Some("/api/v1/users"), &excluded));
        assert!(!auth.requires_auth(None, &[]));

        let mut headers = HeaderMap::new();
        headers.insert("cookie", HeaderValue::from_static("_my_session_id=abc"));
        let request: &dyn AuthRequest = &headers;
        assert!(auth.current_user(Some(request)).await.is_none());
        assert!(auth.current_user(None).await.is_none());
        assert!(auth.session_authenticator().is_none());
        assert_eq!(auth.kind(), AuthType::None);
    }

    #[test]
    fn test_authorization_header() {
        let auth = NoAuthenticator;
        let mut headers = HeaderMap::new();
        assert_eq!(auth.authorization_header(Some(&headers)), None);

        headers.insert("authorization", HeaderValue::from_static("Basic Ym9iOnB3ZA=="));
        assert_eq!(
            auth.authorization_header(Some(&headers)).as_deref(),
            Some("Basic Ym9iOnB3ZA==")
        );
        assert_eq!(auth.authorization_header(None), None);
    }
}
