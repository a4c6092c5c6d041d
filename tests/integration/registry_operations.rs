//! Integration tests for registry operations
//!
//! These tests verify that:
//! - Status updates persist and are recorded in the history
//! - History is capped per service and returned newest first
//! - Refresh runs the simulator over every service
//! - Metrics follow status changes

use pretty_assertions::assert_eq;
use status_board::{
    ServiceQuery, ServiceStatus,
    storage::MAX_HISTORY_PER_SERVICE,
    simulator::{AUTOMATIC_CHANGE_MESSAGE, ONLINE_RESPONSE_MS, UNSTABLE_RESPONSE_MS},
};
use tempfile::tempdir;

use crate::helpers::{spawn_file_registry, spawn_memory_registry};

#[tokio::test]
async fn test_restoring_auth_service_end_to_end() {
    let temp_dir = tempdir().unwrap();
    let registry = spawn_file_registry(&temp_dir.path().join("db.json"), 0.05);

    let before = registry.metrics().await.unwrap();
    assert_eq!(before.total_services, 8);

    let service = registry
        .update_status("6", "online", Some("restored".to_string()))
        .await
        .unwrap();
    assert_eq!(service.status, ServiceStatus::Online);

    let history = registry.history("6", 50).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].message.as_deref(), Some("restored"));

    let after = registry.metrics().await.unwrap();
    assert_eq!(after.offline_services, before.offline_services - 1);
    assert_eq!(after.online_services, before.online_services + 1);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_offline_update_zeroes_response_time() {
    let registry = spawn_memory_registry(0.05);

    let before = registry.get_service("5").await.unwrap();
    assert!(before.response_time > 0);

    let after = registry.update_status("5", "offline", None).await.unwrap();
    assert_eq!(after.response_time, 0);
    assert!(after.last_check >= before.last_check);

    // the stored copy matches the returned snapshot
    assert_eq!(registry.get_service("5").await.unwrap(), after);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_history_keeps_newest_hundred() {
    let registry = spawn_memory_registry(0.05);

    for n in 0..=MAX_HISTORY_PER_SERVICE {
        let status = if n % 2 == 0 { "unstable" } else { "online" };
        registry
            .update_status("1", status, Some(format!("update {n}")))
            .await
            .unwrap();
    }

    let history = registry.history("1", 1000).await.unwrap();
    assert_eq!(history.len(), MAX_HISTORY_PER_SERVICE);
    assert_eq!(history[0].message.as_deref(), Some("update 100"));
    assert_eq!(history[99].message.as_deref(), Some("update 1"));

    // default limit
    assert_eq!(registry.history("1", 50).await.unwrap().len(), 50);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_refresh_with_certain_change_records_automatic_history() {
    let registry = spawn_memory_registry(1.0);

    let services = registry.refresh().await.unwrap();
    assert_eq!(services.len(), 8);

    for service in &services {
        match service.status {
            ServiceStatus::Online => assert!(ONLINE_RESPONSE_MS.contains(&service.response_time)),
            ServiceStatus::Unstable => {
                assert!(UNSTABLE_RESPONSE_MS.contains(&service.response_time))
            }
            ServiceStatus::Offline => assert_eq!(service.response_time, 0),
        }

        for entry in registry.history(service.id.clone(), 50).await.unwrap() {
            assert_eq!(entry.message.as_deref(), Some(AUTOMATIC_CHANGE_MESSAGE));
            assert_eq!(entry.status, service.status);
        }
    }

    // the refreshed collection is what later reads see
    let listed = registry
        .list_services(ServiceQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.services, services);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_refresh_without_changes_keeps_statuses() {
    let registry = spawn_memory_registry(0.0);
    let before = registry.list_services(ServiceQuery::default()).await.unwrap();

    let after = registry.refresh().await.unwrap();

    let statuses = |services: &[status_board::Service]| {
        services.iter().map(|s| s.status).collect::<Vec<_>>()
    };
    assert_eq!(statuses(&before.services), statuses(&after));

    for service in &after {
        assert!(registry.history(service.id.clone(), 50).await.unwrap().is_empty());
    }

    let stats = registry.get_stats().await.unwrap();
    assert_eq!(stats.refresh_count, 1);
    assert_eq!(stats.status_changes, 0);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_list_services_reports_totals() {
    let registry = spawn_memory_registry(0.05);

    let page = registry
        .list_services(ServiceQuery::default().with_page(2, 3))
        .await
        .unwrap();

    assert_eq!(page.services.len(), 3);
    assert_eq!(page.services[0].id, "4");
    assert_eq!(page.pagination.total, 8);
    assert_eq!(page.pagination.total_pages, 3);

    registry.shutdown().await;
}
