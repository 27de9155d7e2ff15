//! Items API server binary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Serve the REST API until `Ctrl-C`

use std::sync::Arc;

use items_api::{start_server, AppState, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point for the items server.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails to
/// bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging. `LOG_FORMAT=json` switches to JSON lines.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }

    info!("items-api starting");

    // 2. Load configuration.
    let config = ServiceConfig::from_env()?;
    info!(
        host = %config.host,
        port = config.port,
        db_path = %config.db_path.display(),
        "Configuration loaded"
    );

    // 3. Serve.
    let state = Arc::new(AppState::new(config.db_path.clone()));
    start_server(&config, state).await?;

    Ok(())
}
