//! Persisted document layout
//!
//! The whole board lives in one document with two top-level collections:
//!
//! ```json
//! {
//!   "services": [ { "id": "1", "name": "...", "lastCheck": "...", ... } ],
//!   "statusHistory": [ { "serviceId": "1", "status": "online", ... } ]
//! }
//! ```
//!
//! `statusHistory` is kept oldest-to-newest and pruned per service.

use serde::{Deserialize, Serialize};

use crate::model::{Service, StatusHistoryEntry};

/// Maximum history entries retained per service
pub const MAX_HISTORY_PER_SERVICE: usize = 100;

/// The complete persisted state of the board
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub services: Vec<Service>,

    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,
}

impl Document {
    /// Append an entry and drop the oldest entries of that service beyond the cap
    ///
    /// Entries of other services keep their relative order.
    pub fn push_history(&mut self, entry: StatusHistoryEntry) {
        let service_id = entry.service_id.clone();
        self.status_history.push(entry);

        let retained = self
            .status_history
            .iter()
            .filter(|h| h.service_id == service_id)
            .count();

        if retained > MAX_HISTORY_PER_SERVICE {
            let mut excess = retained - MAX_HISTORY_PER_SERVICE;
            self.status_history.retain(|h| {
                if excess > 0 && h.service_id == service_id {
                    excess -= 1;
                    false
                } else {
                    true
                }
            });
        }
    }

    /// History of one service, newest first, at most `limit` entries
    pub fn history_for(&self, service_id: &str, limit: usize) -> Vec<StatusHistoryEntry> {
        // reversed storage order keeps same-timestamp entries newest-appended first
        let mut entries: Vec<StatusHistoryEntry> = self
            .status_history
            .iter()
            .rev()
            .filter(|h| h.service_id == service_id)
            .cloned()
            .collect();

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        entries
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}
