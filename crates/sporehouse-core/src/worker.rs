//! Background polling worker.
//!
//! [`FetchWorker`] owns a [`ReadingSource`] and runs fetch cycles in a
//! Tokio task, keeping the UI loop free of network I/O. It communicates
//! with the UI through channels:
//!
//! - Receives [`Command`]s (manual refresh, shutdown)
//! - Sends [`DashboardEvent`]s (status changes, fetched readings, failures)
//!
//! One cycle runs immediately on start, then one per interval tick. Cycles
//! run inline in the select loop, so two fetches never overlap: a tick that
//! falls due during a fetch is skipped, and a refresh requested during a
//! fetch is dropped.

use std::ops::ControlFlow;
use std::time::Duration;

use sporehouse_types::FetchStatus;
use time::OffsetDateTime;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::fetch::fetch_readings;
use crate::messages::{Command, DashboardEvent};
use crate::traits::ReadingSource;

/// Default polling interval.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Background worker that polls a reading source.
pub struct FetchWorker<S> {
    source: S,
    /// Receiver for commands from the UI.
    command_rx: mpsc::Receiver<Command>,
    /// Sender for events back to the UI.
    event_tx: mpsc::Sender<DashboardEvent>,
    refresh_interval: Duration,
    cancel_token: CancellationToken,
}

impl<S: ReadingSource> FetchWorker<S> {
    /// Create a new worker.
    ///
    /// # Arguments
    ///
    /// * `source` - Where readings come from
    /// * `command_rx` - Channel receiver for commands from the UI
    /// * `event_tx` - Channel sender for events to the UI
    /// * `refresh_interval` - Time between automatic fetches
    pub fn new(
        source: S,
        command_rx: mpsc::Receiver<Command>,
        event_tx: mpsc::Sender<DashboardEvent>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            source,
            command_rx,
            event_tx,
            refresh_interval: refresh_interval.max(Duration::from_millis(1)),
            cancel_token: CancellationToken::new(),
        }
    }

    /// Use an externally owned cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    /// A handle that stops the worker when cancelled, aborting any fetch
    /// in flight.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Run the worker's main loop.
    ///
    /// Consumes the worker and runs until [`Command::Shutdown`] is received,
    /// the token is cancelled, or either channel is closed.
    pub async fn run(mut self) {
        info!(
            endpoint = self.source.endpoint(),
            interval_secs = self.refresh_interval.as_secs_f64(),
            "FetchWorker started"
        );

        let mut ticker = interval(self.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let flow = tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    info!("FetchWorker cancelled");
                    ControlFlow::Break(())
                }
                cmd = self.command_rx.recv() => match cmd {
                    Some(Command::Refresh) => {
                        debug!("Manual refresh requested");
                        self.run_cycle().await
                    }
                    Some(Command::Shutdown) => {
                        info!("FetchWorker received shutdown command");
                        ControlFlow::Break(())
                    }
                    None => {
                        info!("Command channel closed, shutting down worker");
                        ControlFlow::Break(())
                    }
                },
                _ = ticker.tick() => self.run_cycle().await,
            };

            if flow.is_break() {
                break;
            }
        }

        info!("FetchWorker stopped");
    }

    /// Run one fetch cycle and report it to the UI.
    async fn run_cycle(&mut self) -> ControlFlow<()> {
        self.send(DashboardEvent::StatusChanged(FetchStatus::Connecting))
            .await?;

        let result = tokio::select! {
            biased;
            _ = self.cancel_token.cancelled() => Err(Error::Cancelled),
            result = fetch_readings(&self.source) => result,
        };

        let event = match result {
            Ok(readings) => DashboardEvent::ReadingsFetched {
                readings,
                fetched_at: OffsetDateTime::now_utc(),
            },
            Err(Error::Cancelled) => return ControlFlow::Break(()),
            Err(e) => {
                warn!(error = %e, "Fetch cycle failed");
                DashboardEvent::FetchFailed {
                    message: e.to_string(),
                }
            }
        };
        self.send(event).await?;

        self.drain_stale_commands()
    }

    /// Discard refresh requests that queued up while a fetch was running.
    fn drain_stale_commands(&mut self) -> ControlFlow<()> {
        while let Ok(cmd) = self.command_rx.try_recv() {
            match cmd {
                Command::Refresh => debug!("Dropping refresh requested during fetch"),
                Command::Shutdown => {
                    info!("FetchWorker received shutdown command");
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    }

    async fn send(&self, event: DashboardEvent) -> ControlFlow<()> {
        if self.event_tx.send(event).await.is_err() {
            info!("Event channel closed, shutting down worker");
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}
