//! HTTP server assembly and lifecycle.
//!
//! [`build_app`] wires the route table, CORS, request tracing and the
//! optional static file fallback around a shared [`AppState`]. [`serve`]
//! binds the listener and runs until Ctrl-C or SIGTERM.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::clients::{GraphqlClient, GraphqlError};
use crate::config::ProxyConfig;
use crate::error::ConfigError;
use crate::routes;

/// Errors that stop the proxy from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The GraphQL relay could not be built.
    #[error(transparent)]
    Relay(#[from] GraphqlError),

    /// Binding or serving the listener failed.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// State shared by every request handler.
///
/// Built once at startup and never mutated, so handlers can run
/// concurrently without coordination.
#[derive(Debug)]
pub struct AppState {
    config: ProxyConfig,
    relay: GraphqlClient,
}

// Verify AppState is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppState>();
};

impl AppState {
    /// Builds the relay for `config` and takes ownership of both.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new(config: ProxyConfig) -> Result<Self, GraphqlError> {
        let relay = GraphqlClient::new(&config)?;
        Ok(Self { config, relay })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Returns the GraphQL relay.
    #[must_use]
    pub const fn relay(&self) -> &GraphqlClient {
        &self.relay
    }
}

/// Builds the complete application router.
///
/// Unmatched paths fall through to the static directory when
/// `PROXY_PUBLIC_DIR` is set, and answer 404 otherwise.
pub fn build_app(state: Arc<AppState>) -> Router {
    let mut router = routes::router();

    if let Some(dir) = state.config().public_dir() {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Runs the proxy until a shutdown signal arrives.
///
/// # Errors
///
/// Returns [`ServerError`] if the relay cannot be built or the port cannot
/// be bound.
pub async fn serve(config: ProxyConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port()));
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, config).await
}

/// Runs the proxy on an already bound listener.
///
/// # Errors
///
/// Returns [`ServerError`] if the relay cannot be built or serving fails.
pub async fn serve_on(listener: TcpListener, config: ProxyConfig) -> Result<(), ServerError> {
    if config.api_version().is_deprecated() {
        tracing::warn!(
            api_version = %config.api_version(),
            "configured Admin API version is past its support window"
        );
    }

    let state = Arc::new(AppState::new(config)?);
    let app = build_app(Arc::clone(&state));

    tracing::info!(
        address = %listener.local_addr()?,
        shop = %state.config().shop(),
        endpoint = %state.relay().endpoint(),
        "proxy listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
