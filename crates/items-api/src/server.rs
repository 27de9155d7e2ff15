//! Items HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and runs the
//! Axum server until `Ctrl-C` is received.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::router::build_router;
use crate::state::AppState;

/// Start the items HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `Ctrl-C`. Returns `Ok(())` on clean shutdown.
///
/// # Errors
///
/// Returns an error if the address is invalid, the TCP listener cannot
/// bind, or the server encounters a fatal I/O error.
pub async fn start_server(config: &ServiceConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = bind_addr(config)?;
    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, db_path = %config.db_path.display(), "Items server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Items server stopped");
    Ok(())
}

/// Socket address for the configured host and port.
fn bind_addr(config: &ServiceConfig) -> Result<SocketAddr, ServerError> {
    let raw = format!("{}:{}", config.host, config.port);
    raw.parse()
        .map_err(|source| ServerError::InvalidAddress { addr: raw, source })
}

/// Resolve when the process receives `Ctrl-C`.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Errors that can occur when starting or running the items server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured host and port do not form a socket address.
    #[error("invalid address {addr:?}: {source}")]
    InvalidAddress {
        /// The `host:port` string that failed to parse.
        addr: String,
        /// The underlying parse error.
        source: std::net::AddrParseError,
    },

    /// Failed to bind to the network address.
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config(host: &str, port: u16) -> ServiceConfig {
        ServiceConfig {
            host: host.to_owned(),
            port,
            db_path: PathBuf::from("db.json"),
        }
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let addr = bind_addr(&config("127.0.0.1", 4000)).unwrap();
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 4000)));
    }

    #[test]
    fn bind_addr_rejects_hostnames() {
        let err = bind_addr(&config("not a host", 4000)).unwrap_err();
        assert!(matches!(
            err,
            ServerError::InvalidAddress { ref addr, .. } if addr == "not a host:4000"
        ));
    }

    #[tokio::test]
    async fn start_server_reports_taken_port() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let state = Arc::new(AppState::new("db.json"));
        let err = start_server(&config("127.0.0.1", port), state)
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Bind { addr, .. } if addr.port() == port));
    }
}
