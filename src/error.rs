//! Error taxonomy for board operations

use std::fmt;

use crate::storage::StorageError;

/// Result type alias for board operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors surfaced by registry operations
///
/// None of these are retried; each one terminates the operation that raised it.
#[derive(Debug)]
pub enum DashboardError {
    /// No service with the given id exists
    NotFound(String),

    /// The status value is not one of the known statuses
    InvalidStatus(String),

    /// The backing store could not be read or written
    Persistence(StorageError),

    /// The registry actor is gone or dropped its reply
    Internal(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::NotFound(id) => write!(f, "service not found: {}", id),
            DashboardError::InvalidStatus(value) => write!(f, "invalid status: {}", value),
            DashboardError::Persistence(err) => write!(f, "persistence failed: {}", err),
            DashboardError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for DashboardError {
    fn from(err: StorageError) -> Self {
        DashboardError::Persistence(err)
    }
}
