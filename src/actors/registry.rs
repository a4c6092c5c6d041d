//! RegistryActor - Owns the board document
//!
//! ## Architecture
//!
//! The actor is the only holder of the [`Store`]. Callers talk to it through
//! a cloneable [`RegistryHandle`]; each logical operation is a single
//! command, handled to completion before the next one is taken off the
//! channel. This turns the store's independent load/save round trips into
//! one critical section per operation.
//!
//! ## Status updates
//!
//! An update is still two writes: the service collection first, then the
//! history entry. Both happen inside the same command, but if the second
//! write fails the first is not rolled back and the error is returned.

use chrono::Utc;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, instrument, trace, warn};

use super::messages::{RegistryCommand, RegistryStats};
use crate::error::{DashboardError, DashboardResult};
use crate::metrics::{DashboardMetrics, compute_metrics};
use crate::model::{Service, StatusHistoryEntry};
use crate::query::{Page, ServiceQuery};
use crate::simulator::{AUTOMATIC_CHANGE_MESSAGE, MonitoringSimulator};
use crate::storage::Store;
use crate::storage::backend::HealthStatus;
use crate::transition::apply_status;

/// Default number of history entries returned by a history query
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Actor owning the store and the simulator's random source
pub struct RegistryActor {
    store: Store,

    simulator: MonitoringSimulator,

    /// Random source for the simulator
    rng: Box<dyn RngCore + Send + Sync>,

    /// Command receiver
    command_rx: mpsc::Receiver<RegistryCommand>,

    stats: RegistryStats,
}

impl RegistryActor {
    pub fn new(
        store: Store,
        simulator: MonitoringSimulator,
        rng: Box<dyn RngCore + Send + Sync>,
        command_rx: mpsc::Receiver<RegistryCommand>,
    ) -> Self {
        let backend = store.backend().describe();
        debug!("creating registry actor on {backend}");

        Self {
            store,
            simulator,
            rng,
            command_rx,
            stats: RegistryStats {
                backend,
                ..RegistryStats::default()
            },
        }
    }

    /// Run the actor's main loop
    ///
    /// Runs until a Shutdown command is received or every handle is dropped.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        debug!("starting registry actor");

        while let Some(cmd) = self.command_rx.recv().await {
            if matches!(cmd, RegistryCommand::Shutdown) {
                debug!("received shutdown command");
                break;
            }
            self.stats.operations += 1;
            self.handle_command(cmd).await;
        }

        debug!("registry actor stopped");
    }

    async fn handle_command(&mut self, cmd: RegistryCommand) {
        match cmd {
            RegistryCommand::ListServices { query, respond_to } => {
                let result = self.list_services(&query).await;
                self.reply(respond_to, result);
            }

            RegistryCommand::GetService { id, respond_to } => {
                let result = self.get_service(&id).await;
                self.reply(respond_to, result);
            }

            RegistryCommand::UpdateStatus {
                id,
                status,
                message,
                respond_to,
            } => {
                let result = self.update_status(&id, &status, message).await;
                self.reply(respond_to, result);
            }

            RegistryCommand::Refresh { respond_to } => {
                let result = self.refresh().await;
                self.reply(respond_to, result);
            }

            RegistryCommand::GetMetrics { respond_to } => {
                let result = self.metrics().await;
                self.reply(respond_to, result);
            }

            RegistryCommand::GetHistory {
                id,
                limit,
                respond_to,
            } => {
                let result = self.history(&id, limit).await;
                self.reply(respond_to, result);
            }

            RegistryCommand::HealthCheck { respond_to } => {
                let result = self
                    .store
                    .backend()
                    .health_check()
                    .await
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }

            RegistryCommand::GetStats { respond_to } => {
                let _ = respond_to.send(self.stats.clone());
            }

            RegistryCommand::Shutdown => {}
        }
    }

    /// Send a reply, counting persistence failures on the way
    fn reply<T>(&mut self, respond_to: oneshot::Sender<DashboardResult<T>>, result: DashboardResult<T>) {
        if let Err(DashboardError::Persistence(e)) = &result {
            self.stats.persistence_failures += 1;
            error!("persistence failure: {e}");
        }

        if respond_to.send(result).is_err() {
            trace!("caller went away before the reply was sent");
        }
    }

    async fn list_services(&self, query: &ServiceQuery) -> DashboardResult<Page> {
        let document = self.store.load().await?;
        let page = query.paginate(&document.services);
        trace!(
            "listed {} of {} matching services",
            page.services.len(),
            page.pagination.total
        );
        Ok(page)
    }

    async fn get_service(&self, id: &str) -> DashboardResult<Service> {
        let document = self.store.load().await?;
        document
            .service(id)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound(id.to_string()))
    }

    async fn update_status(
        &mut self,
        id: &str,
        status: &str,
        message: Option<String>,
    ) -> DashboardResult<Service> {
        let mut document = self.store.load().await?;
        let change = apply_status(&mut document.services, id, status, message, Utc::now())?;

        self.store.save(&document).await?;

        if let Err(e) = self
            .store
            .append_history(id, change.service.status, change.message)
            .await
        {
            warn!("service {id} updated but its history entry was not written");
            return Err(e.into());
        }

        self.stats.status_changes += 1;
        Ok(change.service)
    }

    async fn refresh(&mut self) -> DashboardResult<Vec<Service>> {
        let mut services = self.store.load().await?.services;
        let transitions = self
            .simulator
            .refresh(&mut services, self.rng.as_mut(), Utc::now());

        for transition in &transitions {
            debug!(
                "simulated transition for {}: {} -> {}",
                transition.service_id, transition.from, transition.to
            );
            self.store
                .append_history(
                    &transition.service_id,
                    transition.to,
                    Some(AUTOMATIC_CHANGE_MESSAGE.to_string()),
                )
                .await?;
            self.stats.status_changes += 1;
        }

        self.store.save_services(services.clone()).await?;
        self.stats.refresh_count += 1;

        Ok(services)
    }

    async fn metrics(&self) -> DashboardResult<DashboardMetrics> {
        let document = self.store.load().await?;
        Ok(compute_metrics(&document.services))
    }

    async fn history(&self, id: &str, limit: usize) -> DashboardResult<Vec<StatusHistoryEntry>> {
        let document = self.store.load().await?;
        if document.service(id).is_none() {
            return Err(DashboardError::NotFound(id.to_string()));
        }
        Ok(document.history_for(id, limit))
    }
}

/// Handle for talking to the RegistryActor
#[derive(Clone)]
pub struct RegistryHandle {
    sender: mpsc::Sender<RegistryCommand>,
}

impl RegistryHandle {
    /// Spawn a registry actor with an OS-seeded random source
    pub fn spawn(store: Store, simulator: MonitoringSimulator) -> Self {
        Self::spawn_with_rng(store, simulator, StdRng::from_os_rng())
    }

    /// Spawn a registry actor with a caller-provided random source
    pub fn spawn_with_rng<R>(store: Store, simulator: MonitoringSimulator, rng: R) -> Self
    where
        R: RngCore + Send + Sync + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);

        let actor = RegistryActor::new(store, simulator, Box::new(rng), cmd_rx);
        tokio::spawn(actor.run());

        Self { sender: cmd_tx }
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<DashboardResult<T>>) -> RegistryCommand,
    ) -> DashboardResult<T> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(command(tx))
            .await
            .map_err(|_| DashboardError::Internal("registry actor is not running".to_string()))?;

        rx.await
            .map_err(|_| DashboardError::Internal("registry actor dropped the request".to_string()))?
    }

    /// Filtered, paginated listing with totals
    pub async fn list_services(&self, query: ServiceQuery) -> DashboardResult<Page> {
        self.request(|respond_to| RegistryCommand::ListServices { query, respond_to })
            .await
    }

    pub async fn get_service(&self, id: impl Into<String>) -> DashboardResult<Service> {
        let id = id.into();
        self.request(|respond_to| RegistryCommand::GetService { id, respond_to })
            .await
    }

    /// Change a service's status and record the change
    pub async fn update_status(
        &self,
        id: impl Into<String>,
        status: impl Into<String>,
        message: Option<String>,
    ) -> DashboardResult<Service> {
        let id = id.into();
        let status = status.into();
        self.request(|respond_to| RegistryCommand::UpdateStatus {
            id,
            status,
            message,
            respond_to,
        })
        .await
    }

    /// Run the monitoring simulator once, returning every service
    pub async fn refresh(&self) -> DashboardResult<Vec<Service>> {
        self.request(|respond_to| RegistryCommand::Refresh { respond_to })
            .await
    }

    pub async fn metrics(&self) -> DashboardResult<DashboardMetrics> {
        self.request(|respond_to| RegistryCommand::GetMetrics { respond_to })
            .await
    }

    /// History of one service, newest first, at most `limit` entries
    pub async fn history(
        &self,
        id: impl Into<String>,
        limit: usize,
    ) -> DashboardResult<Vec<StatusHistoryEntry>> {
        let id = id.into();
        self.request(|respond_to| RegistryCommand::GetHistory {
            id,
            limit,
            respond_to,
        })
        .await
    }

    /// Health of the storage backend
    pub async fn health_check(&self) -> DashboardResult<HealthStatus> {
        self.request(|respond_to| RegistryCommand::HealthCheck { respond_to })
            .await
    }

    /// Get registry statistics
    pub async fn get_stats(&self) -> Option<RegistryStats> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::GetStats { respond_to: tx })
            .await
            .ok()?;

        rx.await.ok()
    }

    /// Shutdown the registry actor
    pub async fn shutdown(&self) {
        let _ = self.sender.send(RegistryCommand::Shutdown).await;
    }
}
