//! Remote blob store interface

use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use uuid::Uuid;

/// Events reported by a blob store while a keyed transfer is in flight
///
/// `bytes_sent` is monotonic non-decreasing as reported by the
/// transport; ticks may be dropped or coalesced and are not evenly
/// spaced. Exactly one terminal event ends the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum PutEvent {
    /// A transfer progress tick
    Progress { bytes_sent: u64, total_bytes: u64 },
    /// The transfer completed; the blob is stored remotely
    Succeeded,
    /// The transfer failed; no blob is guaranteed to exist
    Failed { message: String },
}

/// Stream of transfer events for one in-flight put
pub type TransferStream = BoxStream<'static, PutEvent>;

/// A remote blob store that accepts keyed byte transfers
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Start transferring `data` to the blob at `key`
    ///
    /// The transfer begins immediately; the returned stream reports
    /// progress ticks followed by exactly one terminal event. Transport
    /// failures arrive as [`PutEvent::Failed`], never as a panic or an
    /// error from this method.
    fn put(&self, key: Uuid, data: Vec<u8>) -> TransferStream;

    /// Delete the blob at `key`, if present
    async fn delete(&self, key: Uuid) -> Result<()>;
}
