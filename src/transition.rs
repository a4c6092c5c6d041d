//! Status transitions
//!
//! Every status may move to every status, including itself. The only
//! validation is that the service exists and the requested status is one of
//! the known values. Persisting the result and recording the history entry
//! is done by the registry actor.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::model::{Service, ServiceStatus};

/// A validated status change, ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// Snapshot of the service after the change
    pub service: Service,

    /// Status before the change
    pub previous: ServiceStatus,

    pub message: Option<String>,
}

/// Set a service's status in place
///
/// The service must exist (checked before the status value), and the status
/// must parse. On error the collection is left untouched.
pub fn apply_status(
    services: &mut [Service],
    service_id: &str,
    new_status: &str,
    message: Option<String>,
    now: DateTime<Utc>,
) -> DashboardResult<StatusChange> {
    let service = services
        .iter_mut()
        .find(|s| s.id == service_id)
        .ok_or_else(|| DashboardError::NotFound(service_id.to_string()))?;

    let status: ServiceStatus = new_status.parse()?;
    let previous = service.status;

    set_status(service, status, now);
    debug!("service {service_id}: {previous} -> {status}");

    Ok(StatusChange {
        service: service.clone(),
        previous,
        message,
    })
}

/// Set status and check time, zeroing the response time when offline
pub fn set_status(service: &mut Service, status: ServiceStatus, now: DateTime<Utc>) {
    service.status = status;
    service.last_check = now;

    if status == ServiceStatus::Offline {
        service.response_time = 0;
    }
}
