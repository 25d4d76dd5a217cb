//! Application startup and lifecycle management.

use crate::config::PopeConfig;
use crate::handlers::health::health_check;
use crate::handlers::pope::{ask_pope, confess, daily_decree, generate_papal_name};
use crate::services::providers::ChatProvider;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state. The provider is constructed once at startup and
/// injected here; handlers hold no globals.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ChatProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the listener (port 0 = random port for testing) and assemble the
    /// shared state.
    pub async fn build(
        config: &PopeConfig,
        provider: Arc<dyn ChatProvider>,
    ) -> std::io::Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            e
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state: AppState { provider },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped or signalled.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

pub fn build_router(state: AppState) -> Router {
    // Requests are accepted from any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/ask-pope", post(ask_pope))
        .route("/api/daily-decree", get(daily_decree))
        .route("/api/confess", post(confess))
        .route("/api/generate-papal-name", post(generate_papal_name))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
