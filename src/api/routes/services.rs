//! Service endpoints

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use tracing::debug;

use crate::actors::registry::DEFAULT_HISTORY_LIMIT;
use crate::api::{
    error::{ApiError, ApiResult},
    state::ApiState,
    types::{ApiResponse, HistoryParams, ListParams, UpdateStatusRequest, parse_number},
};
use crate::model::{Service, StatusHistoryEntry};
use crate::query::{Page, Pagination};

/// GET /api/services
///
/// Filtered, paginated listing. A filter value outside the known statuses or
/// categories yields an empty page rather than an error.
pub async fn list_services(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ApiResponse<Page>>> {
    let (query, matchable) = params.into_query();
    if !matchable {
        debug!("list filter names an unknown value, returning empty page");
        return Ok(Json(ApiResponse::ok(Page {
            services: Vec::new(),
            pagination: Pagination {
                total: 0,
                page: query.effective_page(),
                limit: query.effective_limit(),
                total_pages: 0,
            },
        })));
    }

    let page = state.registry.list_services(query).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/services/:id
pub async fn get_service(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Service>>> {
    let service = state.registry.get_service(id).await?;
    Ok(Json(ApiResponse::ok(service)))
}

/// PUT /api/services/:id/status
///
/// Body: `{ "status": "offline", "message": "maintenance" }`
pub async fn update_status(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<Service>>> {
    let Json(request) = payload?;

    let status = request
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("status is required".to_string()))?;

    let service = state
        .registry
        .update_status(id, status, request.message)
        .await?;

    Ok(Json(ApiResponse::ok(service)))
}

/// POST /api/services/refresh
///
/// Runs the monitoring simulator once and returns every service.
pub async fn refresh(State(state): State<ApiState>) -> ApiResult<Json<ApiResponse<Vec<Service>>>> {
    let services = state.registry.refresh().await?;
    Ok(Json(ApiResponse::ok(services)))
}

/// GET /api/services/:id/history
///
/// Newest entries first, `limit` defaults to 50.
pub async fn get_history(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(params): Query<HistoryParams>,
) -> ApiResult<Json<ApiResponse<Vec<StatusHistoryEntry>>>> {
    let limit = parse_number(params.limit).unwrap_or(DEFAULT_HISTORY_LIMIT);

    let history = state.registry.history(id, limit).await?;
    Ok(Json(ApiResponse::ok(history)))
}
