//! Shared test doubles for the remote services
//!
//! Each fake is scriptable: tests hold the sending half of a transfer
//! or subscription and feed events at the exact moment they need them.

#![allow(dead_code)]

use async_trait::async_trait;
use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{sleep, timeout};
use upload_pipeline::{
    BlobStore, ChangeEvent, ChangeFeed, ChangeStream, PipelineError, PutEvent, Result,
    SessionProvider, TaskRecord, TransferState, TransferStream,
};
use uuid::Uuid;

/// Counts session checks; optionally fails them
pub struct MockSession {
    calls: AtomicUsize,
    fail: bool,
}

impl MockSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for MockSession {
    async fn ensure_anonymous_session(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PipelineError::session("anonymous sign-in rejected"));
        }
        Ok(())
    }
}

/// Blob store whose transfers are driven by the test
pub struct MockBlobStore {
    transfers: Mutex<HashMap<Uuid, UnboundedSender<PutEvent>>>,
    put_order: Mutex<Vec<Uuid>>,
    deletes: Mutex<Vec<Uuid>>,
    fail_deletes: bool,
}

impl MockBlobStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            transfers: Mutex::new(HashMap::new()),
            put_order: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            fail_deletes: false,
        })
    }

    pub fn with_failing_deletes() -> Arc<Self> {
        Arc::new(Self {
            transfers: Mutex::new(HashMap::new()),
            put_order: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            fail_deletes: true,
        })
    }

    /// Sending half of the transfer event stream for `key`
    pub fn transfer(&self, key: Uuid) -> UnboundedSender<PutEvent> {
        self.transfers
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .expect("no transfer started for key")
    }

    /// Drop the sending half, closing the event stream mid-transfer
    pub fn close_transfer(&self, key: Uuid) {
        self.transfers.lock().unwrap().remove(&key);
    }

    /// Keys passed to `put`, in call order
    pub fn puts(&self) -> Vec<Uuid> {
        self.put_order.lock().unwrap().clone()
    }

    /// Keys passed to `delete`, in call order (attempts, even failing)
    pub fn deletes(&self) -> Vec<Uuid> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    fn put(&self, key: Uuid, _data: Vec<u8>) -> TransferStream {
        let (tx, rx) = mpsc::unbounded();
        self.transfers.lock().unwrap().insert(key, tx);
        self.put_order.lock().unwrap().push(key);
        rx.boxed()
    }

    async fn delete(&self, key: Uuid) -> Result<()> {
        self.deletes.lock().unwrap().push(key);
        if self.fail_deletes {
            return Err(PipelineError::cleanup("blob delete", "simulated failure"));
        }
        Ok(())
    }
}

/// Change feed whose subscriptions are fed by the test
pub struct MockChangeFeed {
    subscriptions: Mutex<HashMap<Uuid, UnboundedSender<ChangeEvent>>>,
    deletes: Mutex<Vec<Uuid>>,
    fail_deletes: bool,
}

impl MockChangeFeed {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            subscriptions: Mutex::new(HashMap::new()),
            deletes: Mutex::new(Vec::new()),
            fail_deletes: false,
        })
    }

    pub fn with_failing_deletes() -> Arc<Self> {
        Arc::new(Self {
            subscriptions: Mutex::new(HashMap::new()),
            deletes: Mutex::new(Vec::new()),
            fail_deletes: true,
        })
    }

    /// Whether a live subscription exists for `key`
    pub fn has_subscription(&self, key: Uuid) -> bool {
        self.subscriptions
            .lock()
            .unwrap()
            .get(&key)
            .map(|tx| !tx.is_closed())
            .unwrap_or(false)
    }

    /// Whether the subscription for `key` was created and then dropped
    pub fn subscription_closed(&self, key: Uuid) -> bool {
        self.subscriptions
            .lock()
            .unwrap()
            .get(&key)
            .map(|tx| tx.is_closed())
            .unwrap_or(false)
    }

    /// Deliver an event; false if the subscriber is gone
    pub fn send(&self, key: Uuid, event: ChangeEvent) -> bool {
        self.subscriptions
            .lock()
            .unwrap()
            .get(&key)
            .map(|tx| tx.unbounded_send(event).is_ok())
            .unwrap_or(false)
    }

    /// Keys passed to `delete`, in call order (attempts, even failing)
    pub fn deletes(&self) -> Vec<Uuid> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChangeFeed for MockChangeFeed {
    fn subscribe(&self, key: Uuid) -> ChangeStream {
        let (tx, rx) = mpsc::unbounded();
        self.subscriptions.lock().unwrap().insert(key, tx);
        rx.boxed()
    }

    async fn delete(&self, key: Uuid) -> Result<()> {
        self.deletes.lock().unwrap().push(key);
        if self.fail_deletes {
            return Err(PipelineError::cleanup("document delete", "simulated failure"));
        }
        Ok(())
    }
}

/// Await the next progress message with a timeout
pub async fn next_message(rx: &mut broadcast::Receiver<String>) -> String {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a progress message")
        .expect("progress channel closed")
}

/// Poll a condition until it holds or two seconds pass
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within timeout");
}

/// Await a specific transfer state
pub async fn wait_for_state(record: &TaskRecord, want: TransferState) {
    let mut state = record.transfer().state_watch();
    timeout(Duration::from_secs(2), async {
        while *state.borrow() != want {
            state.changed().await.expect("state channel closed");
        }
    })
    .await
    .unwrap_or_else(|_| panic!("timed out waiting for state {:?}", want));
}
