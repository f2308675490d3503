//! Progress channels for task records
//!
//! Two deliberately distinct primitives: [`ProgressChannel`] is a plain
//! broadcast of human-readable status strings with no replay for late
//! subscribers, while [`ProgressGauge`] is a latest-value channel of
//! percentages that replays its current value to every new subscriber.

use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Number of status messages buffered per subscriber
pub const PROGRESS_CHANNEL_CAPACITY: usize = 64;

/// Broadcast channel of human-readable status strings
///
/// Subscribers only see messages pushed after they subscribe; there is
/// no latest-value replay. Pushes with no subscribers are dropped.
#[derive(Clone)]
pub struct ProgressChannel {
    tx: broadcast::Sender<String>,
}

impl ProgressChannel {
    /// Create a channel with the given per-subscriber buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Push a status message, ignoring the no-subscriber case
    pub fn push(&self, message: impl Into<String>) {
        let _ = self.tx.send(message.into());
    }

    /// Subscribe to messages pushed from this point on
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ProgressChannel {
    fn default() -> Self {
        Self::new(PROGRESS_CHANNEL_CAPACITY)
    }
}

/// Latest-value channel of transfer percentages in [0, 100]
///
/// Starts at 0. New subscribers immediately observe the current value,
/// so a UI can render state without having watched history.
#[derive(Clone)]
pub struct ProgressGauge {
    tx: Arc<watch::Sender<f64>>,
}

impl ProgressGauge {
    /// Create a gauge at 0 percent
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0.0);
        Self { tx: Arc::new(tx) }
    }

    /// Set the current percentage
    ///
    /// The value is stored even when no subscriber is alive, so a late
    /// subscriber always replays the most recent tick.
    pub fn set(&self, percent: f64) {
        self.tx.send_replace(percent);
    }

    /// Current percentage
    pub fn current(&self) -> f64 {
        *self.tx.borrow()
    }

    /// Subscribe; the receiver replays the current value
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.tx.subscribe()
    }
}

impl Default for ProgressGauge {
    fn default() -> Self {
        Self::new()
    }
}
