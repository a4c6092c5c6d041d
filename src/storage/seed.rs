//! Default service catalog
//!
//! Materialized exactly once, when the store finds no existing document.
//! Bump [`SEED_VERSION`] whenever the catalog below changes.

use chrono::{DateTime, Utc};

use crate::model::{Service, ServiceCategory, ServiceStatus};

use super::schema::Document;

/// Version of the built-in catalog
pub const SEED_VERSION: u32 = 1;

struct SeedService {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    status: ServiceStatus,
    category: ServiceCategory,
    uptime: f64,
    response_time: u64,
    endpoint: &'static str,
}

const SEED_SERVICES: [SeedService; 8] = [
    SeedService {
        id: "1",
        name: "Main API Gateway",
        description: "Primary REST API endpoint for all client requests",
        status: ServiceStatus::Online,
        category: ServiceCategory::Api,
        uptime: 99.9,
        response_time: 45,
        endpoint: "https://api.example.com",
    },
    SeedService {
        id: "2",
        name: "PostgreSQL Database",
        description: "Main production database cluster",
        status: ServiceStatus::Online,
        category: ServiceCategory::Database,
        uptime: 99.95,
        response_time: 12,
        endpoint: "postgres://prod-db.example.com:5432",
    },
    SeedService {
        id: "3",
        name: "Redis Cache",
        description: "Distributed caching layer",
        status: ServiceStatus::Unstable,
        category: ServiceCategory::Cache,
        uptime: 98.5,
        response_time: 8,
        endpoint: "redis://cache.example.com:6379",
    },
    SeedService {
        id: "4",
        name: "RabbitMQ",
        description: "Message queue for async processing",
        status: ServiceStatus::Online,
        category: ServiceCategory::Messaging,
        uptime: 99.7,
        response_time: 15,
        endpoint: "amqp://queue.example.com",
    },
    SeedService {
        id: "5",
        name: "AWS S3 Storage",
        description: "Object storage for user uploads",
        status: ServiceStatus::Online,
        category: ServiceCategory::Storage,
        uptime: 99.99,
        response_time: 120,
        endpoint: "s3://prod-bucket.example.com",
    },
    SeedService {
        id: "6",
        name: "Auth Service",
        description: "OAuth2/JWT authentication service",
        status: ServiceStatus::Offline,
        category: ServiceCategory::Authentication,
        uptime: 95.2,
        response_time: 0,
        endpoint: "https://auth.example.com",
    },
    SeedService {
        id: "7",
        name: "Grafana Monitoring",
        description: "Metrics and monitoring dashboard",
        status: ServiceStatus::Online,
        category: ServiceCategory::Monitoring,
        uptime: 99.8,
        response_time: 230,
        endpoint: "https://grafana.example.com",
    },
    SeedService {
        id: "8",
        name: "Backup API",
        description: "Automated backup service",
        status: ServiceStatus::Online,
        category: ServiceCategory::Api,
        uptime: 99.3,
        response_time: 340,
        endpoint: "https://backup-api.example.com",
    },
];

/// The seed catalog with every `lastCheck` set to `now`
pub fn seed_services(now: DateTime<Utc>) -> Vec<Service> {
    SEED_SERVICES
        .iter()
        .map(|seed| Service {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            status: seed.status,
            category: seed.category,
            last_check: now,
            uptime: seed.uptime,
            response_time: seed.response_time,
            endpoint: Some(seed.endpoint.to_string()),
        })
        .collect()
}

/// A fresh document: seed catalog, empty history
pub fn seed_document(now: DateTime<Utc>) -> Document {
    Document {
        services: seed_services(now),
        status_history: Vec::new(),
    }
}
