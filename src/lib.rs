//! Client-side upload orchestration for remote media analysis
//!
//! Submit a batch of local files and observe, per file, upload progress
//! and the eventual processing result, without blocking on any single
//! file's completion. For each accepted file the orchestrator starts an
//! independent transfer against a remote blob store and a one-shot
//! completion watcher on a remote change feed keyed by the task's id;
//! the two sides run concurrently and are correlated through the
//! returned [`TaskRecord`].
//!
//! The remote blob store, change feed, and session provider are trait
//! seams ([`BlobStore`], [`ChangeFeed`], [`SessionProvider`]) so any
//! transport can back them.

pub mod error;
pub mod orchestrator;
pub mod remote;
pub mod task;
pub mod transfer;
pub mod types;
pub mod watcher;

pub use error::{PipelineError, Result};

pub use orchestrator::{is_excluded_content_type, UploadOrchestrator};

pub use remote::{
    BlobStore, ChangeEvent, ChangeFeed, ChangeStream, PutEvent, SessionProvider, TransferStream,
};

pub use task::{ProgressChannel, ProgressGauge, TaskRecord, PROGRESS_CHANNEL_CAPACITY};

pub use transfer::{TransferAdapter, TransferHandle, TransferState};

pub use types::LocalFile;

pub use watcher::CompletionWatcher;
