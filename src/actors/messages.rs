//! Message types for actor communication
//!
//! ## Design Principles
//!
//! 1. **Commands**: Request/response messages sent to a specific actor via mpsc
//! 2. **Replies**: oneshot channels carry the result back to the caller
//! 3. **One command per logical operation**: the registry never interleaves two
//!    operations, so a command is the unit of consistency

use tokio::sync::oneshot;

use crate::error::DashboardResult;
use crate::metrics::DashboardMetrics;
use crate::model::{Service, StatusHistoryEntry};
use crate::query::{Page, ServiceQuery};
use crate::storage::backend::HealthStatus;

/// Commands that can be sent to the RegistryActor
#[derive(Debug)]
pub enum RegistryCommand {
    /// Filtered, paginated listing
    ListServices {
        query: ServiceQuery,
        respond_to: oneshot::Sender<DashboardResult<Page>>,
    },

    /// Single service by id
    GetService {
        id: String,
        respond_to: oneshot::Sender<DashboardResult<Service>>,
    },

    /// Apply a status change and record it in the history
    ///
    /// `status` is the raw requested value; it is validated by the actor so
    /// that an unknown service is reported before an unknown status.
    UpdateStatus {
        id: String,
        status: String,
        message: Option<String>,
        respond_to: oneshot::Sender<DashboardResult<Service>>,
    },

    /// Run the monitoring simulator over every service
    Refresh {
        respond_to: oneshot::Sender<DashboardResult<Vec<Service>>>,
    },

    /// Dashboard rollups
    GetMetrics {
        respond_to: oneshot::Sender<DashboardResult<DashboardMetrics>>,
    },

    /// History of one service, newest first
    GetHistory {
        id: String,
        limit: usize,
        respond_to: oneshot::Sender<DashboardResult<Vec<StatusHistoryEntry>>>,
    },

    /// Ask the storage backend whether it is operational
    HealthCheck {
        respond_to: oneshot::Sender<DashboardResult<HealthStatus>>,
    },

    /// Get registry statistics
    GetStats {
        respond_to: oneshot::Sender<RegistryStats>,
    },

    /// Gracefully shut down the registry actor
    Shutdown,
}

/// Commands that can be sent to a RefreshScheduler
#[derive(Debug)]
pub enum SchedulerCommand {
    /// Gracefully shut down the scheduler
    Shutdown,
}

/// Registry statistics
#[derive(Debug, Clone, Default)]
pub struct RegistryStats {
    /// Description of the storage backend
    pub backend: String,

    /// Commands handled since start
    pub operations: u64,

    /// Status changes recorded (manual and simulated)
    pub status_changes: u64,

    /// Simulator runs
    pub refresh_count: u64,

    /// Operations that failed with a persistence error
    pub persistence_failures: u64,
}
