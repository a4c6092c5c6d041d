//! Concurrency tests for the registry
//!
//! Every request is handled by a single actor, so concurrent callers must
//! never lose each other's writes.

use std::collections::HashSet;

use status_board::{ServiceQuery, ServiceStatus, storage::MAX_HISTORY_PER_SERVICE};
use tempfile::tempdir;

use crate::helpers::{spawn_file_registry, spawn_memory_registry};

#[tokio::test]
async fn test_concurrent_updates_keep_every_history_entry() {
    let temp_dir = tempdir().unwrap();
    let registry = spawn_file_registry(&temp_dir.path().join("db.json"), 0.05);

    let mut tasks = Vec::new();
    for n in 0..40 {
        let registry = registry.clone();
        tasks.push(tokio::spawn(async move {
            let id = ((n % 8) + 1).to_string();
            let status = ServiceStatus::ALL[n % 3];
            registry
                .update_status(id, status.as_str(), Some(format!("change {n}")))
                .await
        }));
    }

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let mut messages = HashSet::new();
    for id in 1..=8 {
        let history = registry.history(id.to_string(), 1000).await.unwrap();
        assert_eq!(history.len(), 5);
        messages.extend(history.into_iter().filter_map(|entry| entry.message));
    }
    assert_eq!(messages.len(), 40);

    registry.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_reads_and_refreshes() {
    let registry = spawn_memory_registry(0.5);

    let mut tasks = Vec::new();
    for n in 0..30 {
        let registry = registry.clone();
        tasks.push(tokio::spawn(async move {
            if n % 3 == 0 {
                registry.refresh().await.map(|services| services.len())
            } else {
                registry
                    .list_services(ServiceQuery::default())
                    .await
                    .map(|page| page.pagination.total)
            }
        }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), 8);
    }

    let stats = registry.get_stats().await.unwrap();
    assert_eq!(stats.refresh_count, 10);

    let metrics = registry.metrics().await.unwrap();
    assert_eq!(
        metrics.online_services + metrics.unstable_services + metrics.offline_services,
        8
    );

    registry.shutdown().await;
}

#[tokio::test]
async fn test_history_cap_under_concurrent_writers() {
    let registry = spawn_memory_registry(0.05);

    let mut tasks = Vec::new();
    for n in 0..(MAX_HISTORY_PER_SERVICE + 20) {
        let registry = registry.clone();
        tasks.push(tokio::spawn(async move {
            registry
                .update_status("8", "unstable", Some(format!("burst {n}")))
                .await
        }));
    }

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let history = registry.history("8", 1000).await.unwrap();
    assert_eq!(history.len(), MAX_HISTORY_PER_SERVICE);

    // other services are unaffected by the pruning
    assert!(registry.history("1", 1000).await.unwrap().is_empty());

    registry.shutdown().await;
}
