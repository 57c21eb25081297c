//! Telemetry Worker
//!
//! The simulator binding may block, so polling runs on one dedicated thread with its
//! own current-thread tokio runtime. The UI thread only ever sees the newest
//! [`TelemetryUpdate`]: the worker overwrites a single `watch` slot, so there is no
//! backlog to drain.
//!
//! ```text
//!   UI thread                          telemetry thread
//!   ─────────                          ────────────────
//!   latest()  ◄──── watch (1 slot) ──── poll() + focus probe every tick
//!   set_rate() ───► mpsc (1 slot) ───► source.set_rate(delta)
//!   shutdown() ───► watch flag ──────► loop exits, thread joined
//! ```
//!
//! A rate command that arrives while one is still pending is dropped, so clicks never
//! replay late. Shutdown has its own signal and never waits behind a command.

use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;

use crate::error::{Error, Result};
use crate::services::focus::FocusProbe;
use crate::services::telemetry::{RateControl, TelemetrySource, TelemetryUpdate};

/// UI-side handle to the telemetry worker thread
pub struct TelemetryHandle {
    updates: watch::Receiver<Option<TelemetryUpdate>>,
    rate_commands: mpsc::Sender<i8>,
    shutdown: watch::Sender<bool>,
    thread: Option<JoinHandle<()>>,
}

impl TelemetryHandle {
    /// Start polling `source` every `interval` on a dedicated thread
    pub fn spawn(
        source: Box<dyn TelemetrySource>,
        focus: Box<dyn FocusProbe>,
        interval: Duration,
    ) -> Result<Self> {
        let (update_tx, update_rx) = watch::channel(None);
        let (command_tx, command_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let thread = std::thread::Builder::new()
            .name("telemetry".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to create telemetry runtime");
                        return;
                    }
                };
                runtime.block_on(run_worker(
                    source,
                    focus,
                    interval,
                    update_tx,
                    command_rx,
                    shutdown_rx,
                ));
            })?;

        Ok(Self {
            updates: update_rx,
            rate_commands: command_tx,
            shutdown: shutdown_tx,
            thread: Some(thread),
        })
    }

    /// The newest update not yet seen, if any
    pub fn latest(&mut self) -> Option<TelemetryUpdate> {
        if !self.updates.has_changed().unwrap_or(false) {
            return None;
        }
        *self.updates.borrow_and_update()
    }

    /// Whether the worker thread is still alive
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the worker and wait for it to exit. Safe to call more than once.
    pub fn shutdown(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        let _ = self.shutdown.send(true);
        if thread.join().is_err() {
            tracing::error!("Telemetry worker panicked");
        }
        tracing::info!("Telemetry worker stopped");
    }
}

impl RateControl for TelemetryHandle {
    fn set_rate(&mut self, delta: i8) -> Result<()> {
        self.rate_commands.try_send(delta).map_err(|e| {
            let message = match e {
                TrySendError::Full(_) => "previous rate change still pending",
                TrySendError::Closed(_) => "telemetry worker stopped",
            };
            Error::TelemetryUnavailable {
                message: message.to_string(),
            }
        })
    }
}

impl Drop for TelemetryHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for TelemetryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryHandle")
            .field("running", &self.is_running())
            .finish()
    }
}

async fn run_worker(
    mut source: Box<dyn TelemetrySource>,
    mut focus: Box<dyn FocusProbe>,
    interval: Duration,
    update_tx: watch::Sender<Option<TelemetryUpdate>>,
    mut command_rx: mpsc::Receiver<i8>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tracing::info!(source = source.name(), ?interval, "Telemetry worker started");

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut was_connected: Option<bool> = None;

    loop {
        tokio::select! {
            biased;
            // a dropped handle also ends the loop
            _ = shutdown_rx.changed() => break,
            _ = ticker.tick() => {}
            command = command_rx.recv() => match command {
                Some(delta) => {
                    match source.set_rate(delta) {
                        Ok(()) => tracing::info!(delta, "Sim rate change sent"),
                        // display keeps the last polled value
                        Err(e) => {
                            tracing::debug!(delta, error = %e, "Sim rate change ignored");
                            continue;
                        }
                    }
                }
                None => break,
            },
        }

        let sample = source.poll();
        if was_connected != Some(sample.connected) {
            if sample.connected {
                tracing::info!(source = source.name(), "Simulator connected");
            } else {
                tracing::warn!(source = source.name(), "Simulator not connected");
            }
            was_connected = Some(sample.connected);
        }

        let update = TelemetryUpdate {
            sample,
            simulator_focused: focus.simulator_focused(),
        };
        if update_tx.send(Some(update)).is_err() {
            // UI side is gone
            break;
        }
    }
}
