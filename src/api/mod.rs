//! REST API for the status board
//!
//! This module exposes the registry operations over HTTP for the dashboard
//! frontend.
//!
//! ## Architecture
//!
//! - **Axum** web framework with Tower middleware
//! - **Registry handle** for every read and write
//! - **Envelope** `{success, data, error, timestamp}` on every `/api` response
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/services` - Filtered, paginated service list
//! - `GET /api/services/{id}` - Single service
//! - `PUT /api/services/{id}/status` - Change a service's status
//! - `POST /api/services/refresh` - Run the monitoring simulator
//! - `GET /api/services/{id}/history` - Status history, newest first
//! - `GET /api/dashboard/metrics` - Dashboard rollups

#[cfg(feature = "api")]
pub mod error;
#[cfg(feature = "api")]
pub mod routes;
#[cfg(feature = "api")]
pub mod state;
#[cfg(feature = "api")]
pub mod types;

#[cfg(feature = "api")]
pub use error::{ApiError, ApiResult};
#[cfg(feature = "api")]
pub use state::ApiState;
#[cfg(feature = "api")]
pub use types::{ApiResponse, HealthResponse, UpdateStatusRequest};

#[cfg(feature = "api")]
use axum::{
    Router,
    routing::{get, post, put},
};
use std::net::{Ipv4Addr, SocketAddr};
#[cfg(feature = "api")]
use tracing::info;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address (e.g., "0.0.0.0:3001")
    pub bind_addr: SocketAddr,

    /// Enable CORS for the dashboard frontend
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3001)),
            enable_cors: true,
        }
    }
}

/// Build the router with all routes and middleware
#[cfg(feature = "api")]
pub fn build_router(config: &ApiConfig, state: ApiState) -> Router {
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::trace::TraceLayer;

    let api = Router::new()
        .route("/services", get(routes::services::list_services))
        .route("/services/refresh", post(routes::services::refresh))
        .route("/services/:id", get(routes::services::get_service))
        .route("/services/:id/status", put(routes::services::update_status))
        .route("/services/:id/history", get(routes::services::get_history))
        .route("/dashboard/metrics", get(routes::dashboard::get_metrics));

    let mut app = Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api)
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

#[cfg(feature = "api")]
async fn route_not_found(method: axum::http::Method, uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("route not found: {} {}", method, uri.path()))
}

/// Spawn the API server
///
/// This starts an Axum HTTP server in a background task.
/// Returns the server's local address.
#[cfg(feature = "api")]
pub async fn spawn_api_server(config: ApiConfig, state: ApiState) -> anyhow::Result<SocketAddr> {
    info!("starting API server on {}", config.bind_addr);

    let app = build_router(&config, state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("API server listening on {}", addr);
    info!("API available at http://{}/api", addr);

    // Spawn server in background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {}", e);
        }
    });

    Ok(addr)
}
