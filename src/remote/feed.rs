//! Remote document change-feed interface

use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One mutation delivered by the change feed
///
/// An event with no payload is a no-op notification (for example a
/// document deletion) and carries no processing result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Document contents at the time of the event, if any
    pub payload: Option<serde_json::Value>,
}

impl ChangeEvent {
    /// Create an event carrying a document payload
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    /// Create a payload-less notification
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Stream of change events for one subscription; dropping it unsubscribes
pub type ChangeStream = BoxStream<'static, ChangeEvent>;

/// A remote document store with per-key change subscriptions
#[async_trait]
pub trait ChangeFeed: Send + Sync {
    /// Subscribe to mutations of the document at `key`
    ///
    /// Dropping the returned stream cancels the subscription.
    fn subscribe(&self, key: Uuid) -> ChangeStream;

    /// Delete the document at `key`, if present
    async fn delete(&self, key: Uuid) -> Result<()>;
}
