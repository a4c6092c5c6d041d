//! In-memory storage backend (no persistence)
//!
//! This backend keeps the document in memory.
//! It's useful for:
//! - Testing without touching the filesystem
//! - Throwaway boards (`"backend": "none"` in the config)
//!
//! ## Limitations
//!
//! - **No persistence**: All data lost on restart

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use super::backend::{DocumentBackend, HealthStatus};
use super::error::StorageResult;
use super::schema::Document;

/// In-memory document backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: RwLock<Option<Document>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds a document
    pub fn with_document(document: Document) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn read(&self) -> StorageResult<Option<Document>> {
        Ok(self.document.read().await.clone())
    }

    async fn write(&self, document: &Document) -> StorageResult<()> {
        trace!(
            "in-memory backend: storing document with {} services",
            document.services.len()
        );
        *self.document.write().await = Some(document.clone());
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<HealthStatus> {
        let initialized = self.document.read().await.is_some();

        Ok(HealthStatus {
            healthy: true,
            message: "In-memory storage operational".to_string(),
            metadata: HashMap::from([
                ("backend".to_string(), "memory".to_string()),
                ("initialized".to_string(), initialized.to_string()),
            ]),
        })
    }

    fn describe(&self) -> String {
        "In-Memory (no persistence)".to_string()
    }
}
