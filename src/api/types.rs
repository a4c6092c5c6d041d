//! Request and response types for the HTTP API
//!
//! Every `/api` response is wrapped in the same envelope:
//!
//! ```json
//! { "success": true, "data": { ... }, "timestamp": "2024-05-01T10:00:00Z" }
//! { "success": false, "error": "service not found: 42", "timestamp": "..." }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{ServiceCategory, ServiceStatus};
use crate::query::ServiceQuery;
use crate::storage::backend::HealthStatus;

/// Response envelope for all `/api` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Response time (RFC 3339)
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when the storage backend reports a problem
    pub status: String,
    pub timestamp: String,

    /// Seconds since the API server started
    pub uptime: f64,

    pub storage: StorageHealth,
}

/// Storage backend health as reported by the backend itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageHealth {
    pub healthy: bool,
    pub message: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl From<HealthStatus> for StorageHealth {
    fn from(status: HealthStatus) -> Self {
        Self {
            healthy: status.healthy,
            message: status.message,
            details: status.metadata,
        }
    }
}

/// Query parameters for GET /api/services
///
/// Everything is taken as a string and interpreted leniently: empty values
/// are ignored and unparsable numbers fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Build the service query
    ///
    /// The second value is `false` if a status or category filter names a
    /// value outside the known set; such a filter can never match anything.
    /// Page and limit are parsed either way.
    pub fn into_query(self) -> (ServiceQuery, bool) {
        let mut query = ServiceQuery::default();
        let mut matchable = true;

        if let Some(status) = non_empty(self.status) {
            match status.parse::<ServiceStatus>() {
                Ok(status) => query.status = Some(status),
                Err(_) => matchable = false,
            }
        }

        if let Some(category) = non_empty(self.category) {
            match category.parse::<ServiceCategory>() {
                Ok(category) => query.category = Some(category),
                Err(_) => matchable = false,
            }
        }

        query.search = non_empty(self.search);

        if let Some(page) = parse_number(self.page) {
            query.page = page;
        }

        if let Some(limit) = parse_number(self.limit) {
            query.limit = limit;
        }

        (query, matchable)
    }
}

/// Query parameters for GET /api/services/:id/history
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<String>,
}

/// Body of PUT /api/services/:id/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
    pub message: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn parse_number(value: Option<String>) -> Option<usize> {
    non_empty(value).and_then(|v| v.trim().parse().ok())
}
