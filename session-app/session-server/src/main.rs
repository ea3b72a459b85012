use axum::http::{header, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use session_api::{build_router, AppState};
use session_core::UserRepository;
use session_infrastructure::{create_pool, InMemoryUserRepository, PgUserRepository};
use session_security::build_authenticator;
use session_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    session_shared::telemetry::init_telemetry();

    info!("Session server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // User lookup backend
    let users: Arc<dyn UserRepository> = match &config.database.url {
        Some(url) => {
            info!("Using PostgreSQL user store");
            let pool = create_pool(url, config.database.max_connections)?;
            Arc::new(PgUserRepository::new(pool))
        }
        None => {
            info!("Using JSON user store at {}", config.users.file);
            Arc::new(InMemoryUserRepository::load_from_file(&config.users.file).await?)
        }
    };

    // Authentication strategy
    let auth = build_authenticator(config.auth.auth_type, users.clone(), &config.auth.session_name);
    info!(
        auth_type = auth.kind().as_str(),
        session_name = %config.auth.session_name,
        "Authenticator selected"
    );

    // Build router
    let state = AppState::new(auth, users, config.clone());
    let app = build_router(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
