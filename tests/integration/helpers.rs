//! Helper functions for integration tests

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use status_board::{
    actors::registry::RegistryHandle,
    simulator::MonitoringSimulator,
    storage::{Store, file::JsonFileBackend, memory::MemoryBackend},
};

/// Registry over a fresh in-memory store with a seeded random source
pub fn spawn_memory_registry(change_probability: f64) -> RegistryHandle {
    RegistryHandle::spawn_with_rng(
        Store::new(Box::new(MemoryBackend::new())),
        MonitoringSimulator::new(change_probability),
        StdRng::seed_from_u64(1234),
    )
}

/// Registry over a JSON file at `path`
pub fn spawn_file_registry(path: &Path, change_probability: f64) -> RegistryHandle {
    RegistryHandle::spawn_with_rng(
        Store::new(Box::new(JsonFileBackend::new(path))),
        MonitoringSimulator::new(change_probability),
        StdRng::seed_from_u64(1234),
    )
}

/// A minimal document in the on-disk format, as an older deployment would have written it
pub fn legacy_document_json() -> serde_json::Value {
    serde_json::json!({
        "services": [
            {
                "id": "a",
                "name": "Edge Proxy",
                "description": "Ingress for public traffic",
                "status": "online",
                "category": "API",
                "lastCheck": "2024-05-01T10:00:00.000Z",
                "uptime": 99.5,
                "responseTime": 80,
                "endpoint": "https://edge.example.com"
            },
            {
                "id": "b",
                "name": "Session Store",
                "description": "Keeps login sessions",
                "status": "offline",
                "category": "Cache",
                "lastCheck": "2024-05-01T10:00:00.000Z",
                "uptime": 90,
                "responseTime": 0
            }
        ],
        "statusHistory": [
            {
                "serviceId": "b",
                "status": "offline",
                "timestamp": "2024-05-01T09:59:00.000Z",
                "message": "node lost"
            }
        ]
    })
}
