//! Dashboard rollups over the service collection

use serde::{Deserialize, Serialize};

use crate::model::{Service, ServiceStatus};

/// Aggregate snapshot shown at the top of the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_services: usize,
    pub online_services: usize,
    pub offline_services: usize,
    pub unstable_services: usize,

    /// Mean uptime over all services, two decimal places
    pub average_uptime: f64,

    /// Mean response time over services that are not offline, in ms
    pub average_response_time: u64,
}

/// Compute counts and averages
///
/// Averages over an empty set are 0.
pub fn compute_metrics(services: &[Service]) -> DashboardMetrics {
    let count = |status: ServiceStatus| services.iter().filter(|s| s.status == status).count();

    let total_services = services.len();

    let average_uptime = if total_services == 0 {
        0.0
    } else {
        let sum: f64 = services.iter().map(|s| s.uptime).sum();
        round_to_hundredths(sum / total_services as f64)
    };

    let reachable: Vec<u64> = services
        .iter()
        .filter(|s| s.status != ServiceStatus::Offline)
        .map(|s| s.response_time)
        .collect();

    let average_response_time = if reachable.is_empty() {
        0
    } else {
        let sum: u64 = reachable.iter().sum();
        (sum as f64 / reachable.len() as f64).round() as u64
    };

    DashboardMetrics {
        total_services,
        online_services: count(ServiceStatus::Online),
        offline_services: count(ServiceStatus::Offline),
        unstable_services: count(ServiceStatus::Unstable),
        average_uptime,
        average_response_time,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
