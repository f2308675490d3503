//! Transfer adapter implementation
//!
//! The adapter owns a record's progress channels and publishes the
//! transfer state on a watch channel; the spawned driver feeds it
//! transport events until a terminal event arrives.

use crate::remote::{PutEvent, TransferStream};
use crate::task::progress::{ProgressChannel, ProgressGauge};
use crate::transfer::types::TransferState;
use futures::StreamExt;
use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Translates transport events into progress pushes and state changes
pub struct TransferAdapter {
    state_tx: watch::Sender<TransferState>,
    progress: ProgressChannel,
    gauge: ProgressGauge,
}

impl TransferAdapter {
    /// Create an adapter wired to a record's progress channels
    pub fn new(progress: ProgressChannel, gauge: ProgressGauge) -> Self {
        let (state_tx, _) = watch::channel(TransferState::Idle);
        Self {
            state_tx,
            progress,
            gauge,
        }
    }

    /// Spawn the driver task consuming `events` for the transfer at `key`
    ///
    /// The adapter enters `Transferring` immediately. The returned
    /// handle owns the driver task and a watch view of the state.
    pub fn spawn(self, key: Uuid, events: TransferStream) -> TransferHandle {
        let state = self.state_tx.subscribe();
        let task = tokio::spawn(drive(key, events, self));
        TransferHandle { state, task }
    }

    fn state(&self) -> TransferState {
        *self.state_tx.borrow()
    }

    fn begin(&self) {
        self.state_tx.send_replace(TransferState::Transferring);
    }

    /// Handle one progress tick from the transport
    fn on_tick(&self, bytes_sent: u64, total_bytes: u64) {
        if self.state().is_terminal() {
            return;
        }

        // Zero-total transfers report no meaningful percentage.
        let percent = if total_bytes > 0 {
            (bytes_sent as f64 / total_bytes as f64 * 100.0).min(100.0)
        } else {
            0.0
        };

        self.gauge.set(percent);
        self.progress.push(format!("Uploading {:.2}%", percent));
    }

    /// Terminal failure: the record's last word is "Failed to upload"
    fn on_failure(&self) {
        if self.state().is_terminal() {
            return;
        }

        self.gauge.set(100.0);
        self.progress.push("Failed to upload");
        self.state_tx.send_replace(TransferState::Failed);
    }

    /// Terminal success: responsibility passes to the remote pipeline
    fn on_success(&self) {
        if self.state().is_terminal() {
            return;
        }

        self.gauge.set(100.0);
        self.progress.push("Analyzing...");
        self.state_tx.send_replace(TransferState::Succeeded);
    }
}

async fn drive(key: Uuid, mut events: TransferStream, adapter: TransferAdapter) {
    adapter.begin();

    while let Some(event) = events.next().await {
        match event {
            PutEvent::Progress {
                bytes_sent,
                total_bytes,
            } => adapter.on_tick(bytes_sent, total_bytes),
            PutEvent::Succeeded => {
                debug!("transfer {} succeeded", key);
                adapter.on_success();
                return;
            }
            PutEvent::Failed { message } => {
                warn!("transfer {} failed: {}", key, message);
                adapter.on_failure();
                return;
            }
        }
    }

    // The transport closed the stream without a terminal event; the
    // connection dropped mid-transfer.
    warn!("transfer {} event stream ended without a terminal event", key);
    adapter.on_failure();
}

/// Owned handle to one record's transfer driver
pub struct TransferHandle {
    state: watch::Receiver<TransferState>,
    task: JoinHandle<()>,
}

impl TransferHandle {
    /// Current state of the transfer
    pub fn state(&self) -> TransferState {
        *self.state.borrow()
    }

    /// Watch view of the state for use in select loops
    pub fn state_watch(&self) -> watch::Receiver<TransferState> {
        self.state.clone()
    }

    /// Whether the driver task has finished
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl std::fmt::Debug for TransferHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferHandle")
            .field("state", &self.state())
            .field("finished", &self.is_finished())
            .finish()
    }
}
