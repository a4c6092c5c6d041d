//! Document store
//!
//! Wraps a [`DocumentBackend`] with the board's read-modify-write
//! operations. Every method loads the current document, changes it and
//! writes it back in full; nothing is cached between calls. Serialization
//! of concurrent callers is the registry actor's job, not the store's.

use chrono::Utc;
use tracing::{info, trace};

use crate::model::{Service, ServiceStatus, StatusHistoryEntry};

use super::backend::DocumentBackend;
use super::error::StorageResult;
use super::schema::Document;
use super::seed::{SEED_VERSION, seed_document};

pub struct Store {
    backend: Box<dyn DocumentBackend>,
}

impl Store {
    pub fn new(backend: Box<dyn DocumentBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn DocumentBackend {
        self.backend.as_ref()
    }

    /// Load the document, seeding and persisting it on first use
    pub async fn load(&self) -> StorageResult<Document> {
        if let Some(document) = self.backend.read().await? {
            return Ok(document);
        }

        let document = seed_document(Utc::now());
        info!(
            "no document found in {}, seeding catalog v{} ({} services)",
            self.backend.describe(),
            SEED_VERSION,
            document.services.len()
        );
        self.backend.write(&document).await?;

        Ok(document)
    }

    /// Replace the persisted document
    pub async fn save(&self, document: &Document) -> StorageResult<()> {
        self.backend.write(document).await
    }

    /// Replace the service collection, keeping the stored history
    pub async fn save_services(&self, services: Vec<Service>) -> StorageResult<()> {
        let mut document = self.load().await?;
        document.services = services;
        self.save(&document).await
    }

    /// Record a status transition for a service
    ///
    /// The service's history is pruned to the newest 100 entries.
    pub async fn append_history(
        &self,
        service_id: &str,
        status: ServiceStatus,
        message: Option<String>,
    ) -> StorageResult<StatusHistoryEntry> {
        let mut document = self.load().await?;

        let entry = StatusHistoryEntry {
            service_id: service_id.to_string(),
            status,
            timestamp: Utc::now(),
            message,
        };

        trace!("appending history entry for {service_id}: {status}");
        document.push_history(entry.clone());
        self.save(&document).await?;

        Ok(entry)
    }
}
