//! Health check endpoint

use axum::{Json, extract::State};
use tracing::warn;

use crate::api::{
    state::ApiState,
    types::{HealthResponse, StorageHealth},
};

/// GET /health
///
/// Always answers 200; a storage problem shows up as `"status": "degraded"`.
pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    let storage = match state.registry.health_check().await {
        Ok(status) => StorageHealth::from(status),
        Err(e) => StorageHealth {
            healthy: false,
            message: e.to_string(),
            details: Default::default(),
        },
    };

    if !storage.healthy {
        warn!("storage unhealthy: {}", storage.message);
    }

    Json(HealthResponse {
        status: if storage.healthy { "ok" } else { "degraded" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        storage,
    })
}
