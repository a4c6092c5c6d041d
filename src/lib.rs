pub mod actors;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod query;
pub mod simulator;
pub mod storage;
pub mod transition;
pub mod util;

pub use error::{DashboardError, DashboardResult};
pub use metrics::{DashboardMetrics, compute_metrics};
pub use model::{Service, ServiceCategory, ServiceStatus, StatusHistoryEntry};
pub use query::{Page, Pagination, ServiceQuery};
