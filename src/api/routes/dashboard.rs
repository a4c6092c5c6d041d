//! Dashboard rollup endpoint

use axum::{Json, extract::State};

use crate::api::{error::ApiResult, state::ApiState, types::ApiResponse};
use crate::metrics::DashboardMetrics;

/// GET /api/dashboard/metrics
pub async fn get_metrics(
    State(state): State<ApiState>,
) -> ApiResult<Json<ApiResponse<DashboardMetrics>>> {
    let metrics = state.registry.metrics().await?;
    Ok(Json(ApiResponse::ok(metrics)))
}
