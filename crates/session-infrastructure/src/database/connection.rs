//! Database connection pool

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

/// Pool used by the PostgreSQL user lookup. Lazily connects so the server
/// can start before the database is reachable.
pub fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_lazy(url)?;
    info!(max_connections, "PostgreSQL pool configured");
    Ok(pool)
}
