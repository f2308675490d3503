//! Upload orchestrator
//!
//! Iterates a batch of local files, filters unsupported inputs, and
//! wires one transfer driver and one completion watcher per accepted
//! file.

pub mod batch;
pub mod filter;

pub use batch::UploadOrchestrator;
pub use filter::is_excluded_content_type;
