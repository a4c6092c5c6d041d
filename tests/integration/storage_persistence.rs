//! Integration tests for the JSON document store
//!
//! These tests verify that:
//! - The catalog is seeded exactly once
//! - State survives a restart of the registry
//! - Documents written by earlier deployments load unchanged

use pretty_assertions::assert_eq;
use status_board::{
    ServiceCategory, ServiceQuery, ServiceStatus,
    storage::{Store, file::JsonFileBackend},
};
use tempfile::tempdir;

use crate::helpers::{legacy_document_json, spawn_file_registry};

#[tokio::test]
async fn test_first_load_seeds_and_writes_file() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("data").join("db.json");
    assert!(!db_path.exists());

    let store = Store::new(Box::new(JsonFileBackend::new(&db_path)));
    let document = store.load().await.unwrap();

    assert_eq!(document.services.len(), 8);
    assert!(document.status_history.is_empty());
    assert!(db_path.exists());

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&db_path).unwrap()).unwrap();
    assert_eq!(raw["services"].as_array().unwrap().len(), 8);
    assert_eq!(raw["services"][0]["responseTime"], 45);
    assert_eq!(raw["statusHistory"], serde_json::json!([]));
}

#[tokio::test]
async fn test_second_load_does_not_reseed() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("db.json");
    let store = Store::new(Box::new(JsonFileBackend::new(&db_path)));

    let first = store.load().await.unwrap();
    let second = store.load().await.unwrap();

    // seeding stamps lastCheck with the load time, so a reseed would differ
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_updates_survive_restart() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("db.json");

    {
        let registry = spawn_file_registry(&db_path, 0.05);
        registry
            .update_status("3", "offline", Some("disk full".to_string()))
            .await
            .unwrap();
        registry.shutdown().await;
    }

    let registry = spawn_file_registry(&db_path, 0.05);

    let service = registry.get_service("3").await.unwrap();
    assert_eq!(service.status, ServiceStatus::Offline);
    assert_eq!(service.response_time, 0);

    let history = registry.history("3", 50).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].message.as_deref(), Some("disk full"));

    registry.shutdown().await;
}

#[tokio::test]
async fn test_refresh_keeps_history_on_disk() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("db.json");
    let registry = spawn_file_registry(&db_path, 1.0);

    registry
        .update_status("2", "unstable", Some("manual".to_string()))
        .await
        .unwrap();
    registry.refresh().await.unwrap();

    let store = Store::new(Box::new(JsonFileBackend::new(&db_path)));
    let document = store.load().await.unwrap();

    // the manual entry is still there after the refresh rewrote the services
    assert!(
        document
            .status_history
            .iter()
            .any(|entry| entry.message.as_deref() == Some("manual"))
    );

    let listed = registry.list_services(ServiceQuery::default()).await.unwrap();
    assert_eq!(document.services, listed.services);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_loads_existing_document() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("db.json");
    std::fs::write(
        &db_path,
        serde_json::to_string_pretty(&legacy_document_json()).unwrap(),
    )
    .unwrap();

    let registry = spawn_file_registry(&db_path, 0.05);

    let page = registry.list_services(ServiceQuery::default()).await.unwrap();
    assert_eq!(page.pagination.total, 2);

    let proxy = registry.get_service("a").await.unwrap();
    assert_eq!(proxy.category, ServiceCategory::Api);
    assert_eq!(proxy.endpoint.as_deref(), Some("https://edge.example.com"));

    let sessions = registry.get_service("b").await.unwrap();
    assert_eq!(sessions.endpoint, None);
    assert_eq!(sessions.uptime, 90.0);

    let history = registry.history("b", 50).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].message.as_deref(), Some("node lost"));

    registry.shutdown().await;
}

#[tokio::test]
async fn test_document_without_history_loads() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("db.json");
    let mut raw = legacy_document_json();
    raw.as_object_mut().unwrap().remove("statusHistory");
    std::fs::write(&db_path, raw.to_string()).unwrap();

    let registry = spawn_file_registry(&db_path, 0.05);

    assert!(registry.history("a", 50).await.unwrap().is_empty());
    registry
        .update_status("a", "unstable", None)
        .await
        .unwrap();
    assert_eq!(registry.history("a", 50).await.unwrap().len(), 1);

    registry.shutdown().await;
}
