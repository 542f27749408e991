//! HTTP server wiring for Quickpaste (routes, handlers, and shared state).

/// Configuration loading and defaults.
pub mod config;
/// Application error types and HTTP mapping.
pub mod error;
/// HTTP handlers for paste endpoints.
pub mod handlers;
/// Data models for API requests and responses.
pub mod models;
/// In-memory paste storage.
pub mod store;

pub use config::{Config, DEFAULT_PORT};
pub use error::AppError;
pub use store::PasteStore;

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PasteStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct shared application state.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration.
    /// - `store`: Paste store, constructed at process start.
    ///
    /// # Returns
    /// A new [`AppState`].
    pub fn new(config: Config, store: PasteStore) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/", get(handlers::paste::root))
        .route("/paste", post(handlers::paste::create_paste))
        .route("/paste/:id", get(handlers::paste::get_paste))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Resolve the listener address from env var overrides and configuration.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
///
/// # Returns
/// The `BIND` override when set and valid, otherwise `0.0.0.0:{port}`.
pub fn resolve_bind_address(config: &Config) -> SocketAddr {
    let default_bind = SocketAddr::from(([0, 0, 0, 0], config.port));
    match std::env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    }
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Returns
/// `Ok(())` when the server exits cleanly.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
