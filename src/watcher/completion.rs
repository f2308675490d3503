//! Completion watcher implementation
//!
//! Subscribes once to the change feed at the record's id and resolves
//! the record's result from the first non-empty event, then retires
//! itself and releases the record's remote resources. It also watches
//! the sibling transfer's state: a failed transfer triggers the same
//! release path, so every resource opened for a record has a joint
//! shutdown.

use crate::remote::{BlobStore, ChangeFeed};
use crate::task::TaskRecord;
use crate::transfer::TransferState;
use futures::StreamExt;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

enum Outcome {
    /// First non-empty change event arrived
    Result(serde_json::Value),
    /// The sibling transfer failed; retire without a result
    TransferFailed,
    /// The feed closed before delivering a result
    FeedClosed,
}

/// One-shot watcher for a single task record
pub struct CompletionWatcher;

impl CompletionWatcher {
    /// Spawn the watcher for `record`
    ///
    /// At most one watcher is ever active per record; it retires
    /// permanently after its first delivery.
    pub fn spawn(
        record: Arc<TaskRecord>,
        feed: Arc<dyn ChangeFeed>,
        blobs: Arc<dyn BlobStore>,
    ) -> JoinHandle<()> {
        tokio::spawn(run(record, feed, blobs))
    }
}

async fn run(record: Arc<TaskRecord>, feed: Arc<dyn ChangeFeed>, blobs: Arc<dyn BlobStore>) {
    let id = record.id();
    let mut events = feed.subscribe(id);
    let mut transfer_state = record.transfer().state_watch();

    // The transfer may have failed before this task ran; the cloned
    // receiver marks the current value as seen, so check it directly.
    if *transfer_state.borrow() == TransferState::Failed {
        drop(events);
        release(id, feed.as_ref(), blobs.as_ref()).await;
        return;
    }

    let mut state_live = true;
    let outcome = loop {
        tokio::select! {
            event = events.next() => match event {
                Some(event) => {
                    if let Some(payload) = event.payload {
                        break Outcome::Result(payload);
                    }
                    // Payload-less notification, e.g. a document
                    // deletion; the watcher stays active.
                    debug!("empty change event for task {}, ignoring", id);
                }
                None => break Outcome::FeedClosed,
            },
            changed = transfer_state.changed(), if state_live => {
                if *transfer_state.borrow() == TransferState::Failed {
                    break Outcome::TransferFailed;
                }
                if changed.is_err() {
                    // Driver gone with a non-failed terminal state;
                    // keep waiting on the feed alone.
                    state_live = false;
                }
            }
        }
    };

    match outcome {
        Outcome::Result(payload) => {
            if record.set_result(payload) {
                record.push_progress("Complete");
                info!("task {} complete", id);
            } else {
                warn!("result for task {} was already set", id);
            }
            // Dropping the stream cancels the subscription; nothing
            // delivered past this point is processed.
            drop(events);
            release(id, feed.as_ref(), blobs.as_ref()).await;
        }
        Outcome::TransferFailed => {
            debug!("transfer {} failed, releasing remote resources", id);
            drop(events);
            release(id, feed.as_ref(), blobs.as_ref()).await;
        }
        Outcome::FeedClosed => {
            debug!("change feed for task {} closed before a result arrived", id);
        }
    }
}

/// Best-effort cleanup of the record's remote resources
///
/// Failures are logged and swallowed; they never reach the watcher's
/// completion path.
async fn release(id: Uuid, feed: &dyn ChangeFeed, blobs: &dyn BlobStore) {
    if let Err(e) = feed.delete(id).await {
        warn!("failed to delete change-feed document {}: {}", id, e);
    }
    if let Err(e) = blobs.delete(id).await {
        warn!("failed to delete blob {}: {}", id, e);
    }
}
