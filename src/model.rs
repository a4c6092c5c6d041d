//! Domain types for monitored services and their status history
//!
//! These types are serialized with the exact field names used by the
//! persisted data file (`lastCheck`, `responseTime`, `serviceId`, ...), so a
//! document written by any earlier version of the board stays readable.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Current status of a monitored service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Unstable,
    Offline,
}

impl ServiceStatus {
    /// All statuses, in the order used for uniform random draws
    pub const ALL: [ServiceStatus; 3] = [
        ServiceStatus::Online,
        ServiceStatus::Unstable,
        ServiceStatus::Offline,
    ];

    /// Get the string representation (lowercase)
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "online",
            ServiceStatus::Unstable => "unstable",
            ServiceStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashboardError::InvalidStatus(s.to_string()))
    }
}

/// Closed set of service categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    #[serde(rename = "API")]
    Api,
    Database,
    Cache,
    Messaging,
    Storage,
    Authentication,
    Monitoring,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::Api,
        ServiceCategory::Database,
        ServiceCategory::Cache,
        ServiceCategory::Messaging,
        ServiceCategory::Storage,
        ServiceCategory::Authentication,
        ServiceCategory::Monitoring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Api => "API",
            ServiceCategory::Database => "Database",
            ServiceCategory::Cache => "Cache",
            ServiceCategory::Messaging => "Messaging",
            ServiceCategory::Storage => "Storage",
            ServiceCategory::Authentication => "Authentication",
            ServiceCategory::Monitoring => "Monitoring",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

/// A monitored service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Stable identifier, assigned once in the seed catalog
    pub id: String,

    pub name: String,

    pub description: String,

    pub status: ServiceStatus,

    pub category: ServiceCategory,

    /// When the status was last evaluated
    pub last_check: DateTime<Utc>,

    /// Availability percentage (0-100)
    pub uptime: f64,

    /// Response time in milliseconds, always 0 while offline
    pub response_time: u64,

    /// Connection string, descriptive only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// One recorded status transition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    pub service_id: String,

    /// The status being entered
    pub status: ServiceStatus,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
