//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    AUTH_TYPE_SESSION, DEFAULT_EXCLUDED_PATHS, DEFAULT_HOST, DEFAULT_MAX_DB_CONNECTIONS,
    DEFAULT_PORT, DEFAULT_SESSION_NAME, DEFAULT_USERS_FILE,
};
use crate::error::AppError;

/// Authentication strategy selected once at startup.
///
/// Only `session_auth` selects session cookies; any other value falls back
/// to the permissive default authenticator.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum AuthType {
    #[default]
    None,
    SessionAuth,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::SessionAuth => AUTH_TYPE_SESSION,
        }
    }
}

impl From<&str> for AuthType {
    fn from(value: &str) -> Self {
        if value.trim() == AUTH_TYPE_SESSION {
            AuthType::SessionAuth
        } else {
            AuthType::None
        }
    }
}

impl From<String> for AuthType {
    fn from(value: String) -> Self {
        AuthType::from(value.as_str())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub auth: AuthSettings,
    pub users: UserStoreSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub auth_type: AuthType,
    /// Name of the cookie carrying the session id.
    pub session_name: String,
    pub excluded_paths: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserStoreSettings {
    pub file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// When unset, users are served from the JSON user file.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl AppConfig {
    /// Layered load: defaults, `config/default`, `config/{APP_ENV}`,
    /// `APP__SECTION__KEY` variables, then the short legacy variables
    /// (`API_HOST`, `API_PORT`, `AUTH_TYPE`, `SESSION_NAME`, `USERS_FILE`,
    /// `DATABASE_URL`).
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder(&env)?.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn builder(env: &str) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let excluded: Vec<String> = DEFAULT_EXCLUDED_PATHS.iter().map(|p| p.to_string()).collect();
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", DEFAULT_PORT)?
            .set_default("app.name", "session-server")?
            .set_default("auth.auth_type", AuthType::None.as_str())?
            .set_default("auth.session_name", DEFAULT_SESSION_NAME)?
            .set_default("auth.excluded_paths", excluded)?
            .set_default("users.file", DEFAULT_USERS_FILE)?
            .set_default("database.max_connections", DEFAULT_MAX_DB_CONNECTIONS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.excluded_paths")
                    .try_parsing(true),
            )
            .set_override_option("app.host", std::env::var("API_HOST").ok())?
            .set_override_option("app.port", std::env::var("API_PORT").ok())?
            .set_override_option("auth.auth_type", std::env::var("AUTH_TYPE").ok())?
            .set_override_option("auth.session_name", std::env::var("SESSION_NAME").ok())?
            .set_override_option("users.file", std::env::var("USERS_FILE").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())
    }

    /// Rejects settings that would make every session lookup miss.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.auth_type == AuthType::SessionAuth && self.auth.session_name.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "auth.session_name must be set when auth_type is session_auth".to_string(),
            ));
        }
        if self.app.port == 0 {
            return Err(AppError::InvalidConfig("app.port must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(auth_type: AuthType, session_name: &str) -> AppConfig {
        AppConfig {
            app: AppSettings {
                env: "test".into(),
                host: DEFAULT_HOST.into(),
                port: DEFAULT_PORT,
                name: "session-server".into(),
            },
            auth: AuthSettings {
                auth_type,
                session_name: session_name.into(),
                excluded_paths: vec![],
            },
            users: UserStoreSettings { file: DEFAULT_USERS_FILE.into() },
            database: DatabaseSettings { url: None, max_connections: 1 },
        }
    }

    #[test]
    fn test_auth_type_parsing() {
        assert_eq!(AuthType::from("session_auth"), AuthType::SessionAuth);
        assert_eq!(AuthType::from(" session_auth "), AuthType::SessionAuth);
        assert_eq!(AuthType::from("basic_auth"), AuthType::None);
        assert_eq!(AuthType::from(""), AuthType::None);
        assert_eq!(AuthType::default(), AuthType::None);
    }

    #[test]
    fn test_builder_defaults() {
        let config: AppConfig = AppConfig::builder("no-such-env")
            .unwrap()
            .set_override("auth.auth_type", "session_auth")
            .unwrap()
            .set_override("auth.session_name", DEFAULT_SESSION_NAME)
            .unwrap()
            .set_override("app.port", 5000)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.auth.auth_type, AuthType::SessionAuth);
        assert_eq!(config.auth.session_name, DEFAULT_SESSION_NAME);
        assert_eq!(config.app.port, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shipped_default_file_keeps_routes_open() {
        let shipped = Config::builder()
            .add_source(File::from_str(
                include_str!("../../../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let auth_type = AuthType::from(shipped.get_string("auth.auth_type").unwrap());
        assert_eq!(auth_type, AuthType::default());
    }

    #[test]
    fn test_validate_rejects_empty_session_name() {
        let config = sample_config(AuthType::SessionAuth, "  ");
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_ignores_session_name_without_session_auth() {
        let config = sample_config(AuthType::None, "");
        assert!(config.validate().is_ok());
    }
}
