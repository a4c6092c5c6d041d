//! Storage backend trait definition
//!
//! This module defines the `DocumentBackend` trait that every
//! storage medium for the board document must implement.

use std::collections::HashMap;

use async_trait::async_trait;

use super::error::StorageResult;
use super::schema::Document;

/// Health status of the storage backend
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Is the backend operational?
    pub healthy: bool,

    /// Human-readable status message
    pub message: String,

    /// Additional backend-specific metadata
    pub metadata: HashMap<String, String>,
}

/// Trait for whole-document storage backends
///
/// The board persists a single document; backends only need to read it
/// back and replace it wholesale. There is no merging: `write` fully
/// replaces whatever was stored before.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync` as they are owned by the
/// registry actor task.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Read the stored document
    ///
    /// Returns `Ok(None)` if nothing has been persisted yet. A stored
    /// document that cannot be decoded is an error, not `None`.
    async fn read(&self) -> StorageResult<Option<Document>>;

    /// Replace the stored document
    async fn write(&self, document: &Document) -> StorageResult<()>;

    /// Check backend health
    ///
    /// Performs a lightweight operation to verify the backend
    /// is operational (e.g., check file access).
    async fn health_check(&self) -> StorageResult<HealthStatus>;

    /// Short human-readable description (e.g. "JSON file: ./data/db.json")
    fn describe(&self) -> String;
}
