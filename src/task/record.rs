//! The per-file task record

use crate::task::progress::{ProgressChannel, ProgressGauge};
use crate::transfer::TransferHandle;
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch, OnceCell};
use uuid::Uuid;

/// Aggregate state for one accepted file
///
/// Created during batch submission; its transfer and completion watcher
/// start immediately. The record never garbage-collects itself; the
/// completion watcher releases the remote resources tied to it.
pub struct TaskRecord {
    name: String,
    id: Uuid,
    created_at: DateTime<Utc>,
    transfer: TransferHandle,
    progress: ProgressChannel,
    progress_numeric: ProgressGauge,
    /// Single-assignment slot for the remote processing result. The
    /// cell rejects a second write, so the exactly-once invariant is
    /// structural rather than convention-based.
    result: OnceCell<serde_json::Value>,
}

impl TaskRecord {
    pub(crate) fn new(
        name: String,
        id: Uuid,
        transfer: TransferHandle,
        progress: ProgressChannel,
        progress_numeric: ProgressGauge,
    ) -> Self {
        Self {
            name,
            id,
            created_at: Utc::now(),
            transfer,
            progress,
            progress_numeric,
            result: OnceCell::new(),
        }
    }

    /// Original filename, display-only
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote correlation key; unique for the record's lifetime
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the record was constructed
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Handle to this record's transfer driver
    pub fn transfer(&self) -> &TransferHandle {
        &self.transfer
    }

    /// Subscribe to status messages pushed from this point on
    pub fn subscribe_progress(&self) -> broadcast::Receiver<String> {
        self.progress.subscribe()
    }

    /// Subscribe to the numeric gauge; replays the latest percentage
    pub fn subscribe_progress_numeric(&self) -> watch::Receiver<f64> {
        self.progress_numeric.subscribe()
    }

    /// Latest transfer percentage in [0, 100]
    pub fn progress_percent(&self) -> f64 {
        self.progress_numeric.current()
    }

    /// The remote processing result, once it has arrived
    pub fn result(&self) -> Option<&serde_json::Value> {
        self.result.get()
    }

    /// Fill the result slot; returns false if it was already filled
    pub(crate) fn set_result(&self, value: serde_json::Value) -> bool {
        self.result.set(value).is_ok()
    }

    /// Push a status message on behalf of the completion watcher
    pub(crate) fn push_progress(&self, message: impl Into<String>) {
        self.progress.push(message);
    }
}

impl std::fmt::Debug for TaskRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRecord")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("state", &self.transfer.state())
            .field("progress_percent", &self.progress_percent())
            .field("result_set", &self.result.initialized())
            .finish()
    }
}
