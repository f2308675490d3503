//! Per-file task state
//!
//! A [`TaskRecord`] aggregates one accepted file's identity, its
//! transfer handle, two progress channels, and a write-once result
//! slot.

pub mod progress;
pub mod record;

pub use progress::{ProgressChannel, ProgressGauge, PROGRESS_CHANNEL_CAPACITY};
pub use record::TaskRecord;
