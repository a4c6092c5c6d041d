//! Simulated monitoring
//!
//! There is no real probing: a refresh stamps every service as checked,
//! occasionally flips a status at random and redraws response times from a
//! per-status range. The random source is passed in so a seeded generator
//! gives reproducible runs.

use std::ops::Range;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, trace};

use crate::model::{Service, ServiceStatus};
use crate::transition::set_status;

/// Annotation recorded for transitions made by the simulator
pub const AUTOMATIC_CHANGE_MESSAGE: &str = "status changed automatically";

/// Default per-service probability of drawing a new status on refresh
pub const DEFAULT_CHANGE_PROBABILITY: f64 = 0.05;

/// Response time range (ms) for online services
pub const ONLINE_RESPONSE_MS: Range<u64> = 10..210;

/// Response time range (ms) for unstable services
pub const UNSTABLE_RESPONSE_MS: Range<u64> = 200..700;

/// A status change made during a refresh
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedTransition {
    pub service_id: String,
    pub from: ServiceStatus,
    pub to: ServiceStatus,
}

#[derive(Debug, Clone)]
pub struct MonitoringSimulator {
    change_probability: f64,
}

impl Default for MonitoringSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_CHANGE_PROBABILITY)
    }
}

impl MonitoringSimulator {
    /// Create a simulator; the probability is clamped to `[0, 1]`
    pub fn new(change_probability: f64) -> Self {
        let change_probability = if change_probability.is_nan() {
            DEFAULT_CHANGE_PROBABILITY
        } else {
            change_probability.clamp(0.0, 1.0)
        };
        Self { change_probability }
    }

    pub fn change_probability(&self) -> f64 {
        self.change_probability
    }

    /// Refresh one service in place
    ///
    /// Returns the transition if the drawn status differs from the current one.
    pub fn refresh_service<R: Rng + ?Sized>(
        &self,
        service: &mut Service,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<SimulatedTransition> {
        service.last_check = now;

        let mut transition = None;
        if rng.random_bool(self.change_probability) {
            let drawn = ServiceStatus::ALL[rng.random_range(0..ServiceStatus::ALL.len())];
            if drawn != service.status {
                trace!("service {}: drew {}", service.id, drawn);
                transition = Some(SimulatedTransition {
                    service_id: service.id.clone(),
                    from: service.status,
                    to: drawn,
                });
                set_status(service, drawn, now);
            }
        }

        service.response_time = sample_response_time(service.status, rng);
        transition
    }

    /// Refresh every service, returning the transitions in collection order
    pub fn refresh<R: Rng + ?Sized>(
        &self,
        services: &mut [Service],
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Vec<SimulatedTransition> {
        let transitions: Vec<_> = services
            .iter_mut()
            .filter_map(|service| self.refresh_service(service, rng, now))
            .collect();

        debug!(
            "refreshed {} services, {} status changes",
            services.len(),
            transitions.len()
        );
        transitions
    }
}

/// Draw a response time for the given status
pub fn sample_response_time<R: Rng + ?Sized>(status: ServiceStatus, rng: &mut R) -> u64 {
    match status {
        ServiceStatus::Online => rng.random_range(ONLINE_RESPONSE_MS),
        ServiceStatus::Unstable => rng.random_range(UNSTABLE_RESPONSE_MS),
        ServiceStatus::Offline => 0,
    }
}
