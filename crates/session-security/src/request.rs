//! Narrow, read-only view of an inbound HTTP request

use cookie::Cookie;
use http::{request::Parts, HeaderMap};
use session_shared::constants::COOKIE_HEADER;

/// The only request capabilities an authenticator relies on.
pub trait AuthRequest: Send + Sync {
    /// Value of the cookie called `name`, if the client sent one.
    fn cookie(&self, name: &str) -> Option<String>;

    /// Value of the header called `name` (case-insensitive).
    fn header(&self, name: &str) -> Option<String>;
}

impl AuthRequest for HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get_all(COOKIE_HEADER)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| Cookie::split_parse(value))
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value_trimmed().to_string())
    }

    fn header(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

impl AuthRequest for Parts {
    fn cookie(&self, name: &str) -> Option<String> {
        self.headers.cookie(name)
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers.header(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderValue, Request};

    #[test]
    fn test_cookie_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_static("theme=dark; _my_session_id=abc-123; lang=en"),
        );

        assert_eq!(headers.cookie("_my_session_id").as_deref(), Some("abc-123"));
        assert_eq!(headers.cookie("theme").as_deref(), Some("dark"));
        assert_eq!(headers.cookie("missing"), None);
        assert_eq!(headers.cookie("_my_session"), None);
    }

    #[test]
    fn test_cookie_across_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append("cookie", HeaderValue::from_static("a=1"));
        headers.append("cookie", HeaderValue::from_static("b=\"2\""));

        assert_eq!(headers.cookie("a").as_deref(), Some("1"));
        assert_eq!(headers.cookie("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_malformed_pairs_are_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_static("garbage; =nokey; sid=abc; other=1"),
        );

        assert_eq!(headers.cookie("sid").as_deref(), Some("abc"));
        assert_eq!(headers.cookie("other").as_deref(), Some("1"));
        assert_eq!(headers.cookie("garbage"), None);
    }

    #[test]
    fn test_no_cookie_header() {
        let headers = HeaderMap::new();
        assert_eq!(headers.cookie("_my_session_id"), None);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let (parts, _) = Request::builder()
            .header("authorization", "Basic Ym9iOnB3ZA==")
            .header("cookie", "sid=xyz")
            .body(())
            .unwrap()
            .into_parts();

        assert_eq!(parts.header("Authorization").as_deref(), Some("Basic Ym9iOnB3ZA=="));
        assert_eq!(parts.header("X-Missing"), None);
        assert_eq!(parts.cookie("sid").as_deref(), Some("xyz"));
    }
}
