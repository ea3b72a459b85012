//! Application-wide constants

pub const API_PREFIX: &str = "/api/v1";
pub const AUTH_TYPE_SESSION: &str = "session_auth";
pub const DEFAULT_SESSION_NAME: &str = "_my_session_id";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_USERS_FILE: &str = ".db_User.json";
pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;
pub const DEFAULT_EXCLUDED_PATHS: [&str; 2] = ["/api/v1/status/", "/api/v1/auth_session/login/"];
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const COOKIE_HEADER: &str = "Cookie";
