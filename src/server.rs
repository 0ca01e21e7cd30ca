//! HTTP server initialization and runtime setup.
//!
//! Opens the SQLite pool, brings the schema up, wires the service graph,
//! and runs the Axum server.

use crate::config::Config;
use crate::infrastructure::persistence::init_schema;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the listen address
/// cannot be bound, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    init_schema(&pool).await?;
    tracing::info!("Database schema ready");

    let state = AppState::new(pool, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
