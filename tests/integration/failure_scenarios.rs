//! Integration tests for failure handling
//!
//! These tests verify that:
//! - Unknown services and statuses are rejected without side effects
//! - Storage failures surface as persistence errors
//! - A corrupt document is reported, never silently reseeded

use assert_matches::assert_matches;
use status_board::{DashboardError, ServiceQuery, storage::StorageError};
use tempfile::tempdir;

use crate::helpers::{spawn_file_registry, spawn_memory_registry};

#[tokio::test]
async fn test_unknown_service() {
    let registry = spawn_memory_registry(0.05);

    assert_matches!(
        registry.get_service("999").await,
        Err(DashboardError::NotFound(id)) if id == "999"
    );
    assert_matches!(
        registry.update_status("999", "online", None).await,
        Err(DashboardError::NotFound(_))
    );
    assert_matches!(
        registry.history("999", 50).await,
        Err(DashboardError::NotFound(_))
    );

    registry.shutdown().await;
}

#[tokio::test]
async fn test_invalid_status_has_no_side_effects() {
    let registry = spawn_memory_registry(0.05);
    let before = registry.get_service("4").await.unwrap();

    assert_matches!(
        registry.update_status("4", "degraded", None).await,
        Err(DashboardError::InvalidStatus(value)) if value == "degraded"
    );
    // status values are case sensitive
    assert_matches!(
        registry.update_status("4", "ONLINE", None).await,
        Err(DashboardError::InvalidStatus(_))
    );

    assert_eq!(registry.get_service("4").await.unwrap(), before);
    assert!(registry.history("4", 50).await.unwrap().is_empty());

    registry.shutdown().await;
}

#[tokio::test]
async fn test_unwritable_store_reports_persistence_error() {
    let temp_dir = tempdir().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    // the parent "directory" is a regular file
    let registry = spawn_file_registry(&blocker.join("db.json"), 0.05);

    assert_matches!(
        registry.refresh().await,
        Err(DashboardError::Persistence(StorageError::IoError(_)))
    );
    assert_matches!(
        registry.list_services(ServiceQuery::default()).await,
        Err(DashboardError::Persistence(_))
    );

    let stats = registry.get_stats().await.unwrap();
    assert_eq!(stats.persistence_failures, 2);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_corrupt_document_is_not_reseeded() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("db.json");
    std::fs::write(&db_path, "{\"services\": [").unwrap();

    let registry = spawn_file_registry(&db_path, 0.05);

    assert_matches!(
        registry.metrics().await,
        Err(DashboardError::Persistence(StorageError::SerializationError(_)))
    );
    assert_matches!(
        registry.update_status("1", "offline", None).await,
        Err(DashboardError::Persistence(_))
    );

    // the broken file is left for an operator to inspect
    assert_eq!(std::fs::read_to_string(&db_path).unwrap(), "{\"services\": [");

    registry.shutdown().await;
}

#[tokio::test]
async fn test_handle_after_shutdown() {
    let registry = spawn_memory_registry(0.05);
    registry.shutdown().await;

    // give the actor a moment to exit
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    assert_matches!(
        registry.get_service("1").await,
        Err(DashboardError::Internal(_))
    );
    assert!(registry.get_stats().await.is_none());
}
