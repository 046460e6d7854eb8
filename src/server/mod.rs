//! HTTP server
//!
//! Wires the validation endpoint and the UI bundle into an axum router:
//!
//! | Method   | Path               | Response                                  |
//! |----------|--------------------|-------------------------------------------|
//! | GET      | `/`                | bundled `index.html`                      |
//! | GET      | `/favicon.ico`     | bundled favicon                           |
//! | GET      | `/static/*`        | bundled asset, content type by extension  |
//! | GET/POST | `/api/v1/validate` | plain-text validation report              |
//! | any      | `/api/*`           | 404                                       |
//!
//! Requests share no mutable state. The asset source is immutable for the
//! lifetime of the process.

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;

use anyhow::Context;
use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};
use uuid::Uuid;

pub use assets::{AssetSource, DirectoryAssets, EmbeddedAssets};
pub use config::{DEFAULT_REQUEST_TIMEOUT_SECS, ServerConfig, sample_config};
pub use error::ApiError;

use crate::validation::InputLimits;
use crate::validation::input::DEFAULT_MAX_BODY_BYTES;

/// Path of the validation endpoint
pub const VALIDATE_PATH: &str = "/api/v1/validate";

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<dyn AssetSource>,
    pub limits: InputLimits,
    pub max_body_bytes: usize,
    /// Requests still running after this are answered with 408
    pub request_timeout: Duration,
}

impl AppState {
    /// State serving the embedded bundle with default limits
    pub fn new() -> Self {
        Self {
            assets: Arc::new(EmbeddedAssets::new()),
            limits: InputLimits::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Build state from configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        let assets: Arc<dyn AssetSource> = match &config.assets.directory {
            Some(dir) => Arc::new(DirectoryAssets::new(dir)),
            None => Arc::new(EmbeddedAssets::new()),
        };
        Self {
            assets,
            limits: config.input_limits(),
            max_body_bytes: config.limits.max_body_bytes,
            request_timeout: config.request_timeout(),
        }
    }

    pub fn with_assets(mut self, assets: Arc<dyn AssetSource>) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    let timeout =
        TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, state.request_timeout);

    Router::new()
        .route(
            VALIDATE_PATH,
            get(handlers::validate)
                .post(handlers::validate)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::site)
        .layer(body_limit)
        .layer(timeout)
        .with_state(state)
}

/// Bind and serve until Ctrl-C or SIGTERM
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let state = AppState::from_config(&config);
    info!(assets = %state.assets.describe(), "Serving UI");

    let app = router(state).layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(address = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
