//! RefreshScheduler - Periodically runs the monitoring simulator
//!
//! The registry only simulates when asked. This actor is the optional
//! "someone asks periodically" part, started by the hub when a refresh
//! interval is configured.
//!
//! ## Message Flow
//!
//! ```text
//! Timer tick → RegistryHandle::refresh() → store updated
//!     ↑
//!     └─── Commands (Shutdown)
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, instrument, trace, warn};

use super::messages::SchedulerCommand;
use super::registry::RegistryHandle;
use crate::error::DashboardResult;

/// Actor that triggers a refresh at a fixed interval
pub struct RefreshScheduler {
    registry: RegistryHandle,

    /// Command receiver for control messages
    command_rx: mpsc::Receiver<SchedulerCommand>,

    /// Time between refreshes
    interval_duration: Duration,
}

impl RefreshScheduler {
    pub fn new(
        registry: RegistryHandle,
        command_rx: mpsc::Receiver<SchedulerCommand>,
        interval_duration: Duration,
    ) -> Self {
        Self {
            registry,
            command_rx,
            interval_duration,
        }
    }

    /// Run the actor's main loop
    ///
    /// The first tick fires immediately, so a refresh happens on start.
    #[instrument(skip(self), fields(interval = ?self.interval_duration))]
    pub async fn run(mut self) {
        debug!("starting refresh scheduler");

        let mut ticker = interval(self.interval_duration);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.refresh().await {
                        error!("scheduled refresh failed: {e}");
                    }
                }

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(SchedulerCommand::Shutdown) => {
                            debug!("received shutdown command");
                            break;
                        }
                        None => {
                            warn!("command channel closed, shutting down");
                            break;
                        }
                    }
                }
            }
        }

        debug!("refresh scheduler stopped");
    }

    async fn refresh(&self) -> DashboardResult<()> {
        let services = self.registry.refresh().await?;
        trace!("scheduled refresh touched {} services", services.len());
        Ok(())
    }
}

/// Handle for controlling a RefreshScheduler
#[derive(Clone)]
pub struct SchedulerHandle {
    sender: mpsc::Sender<SchedulerCommand>,
}

impl SchedulerHandle {
    /// Spawn a scheduler refreshing every `interval_secs` seconds (minimum 1)
    pub fn spawn(registry: RegistryHandle, interval_secs: u64) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);

        let scheduler = RefreshScheduler::new(
            registry,
            cmd_rx,
            Duration::from_secs(interval_secs.max(1)),
        );
        tokio::spawn(scheduler.run());

        Self { sender: cmd_tx }
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&self) {
        let _ = self.sender.send(SchedulerCommand::Shutdown).await;
    }
}
