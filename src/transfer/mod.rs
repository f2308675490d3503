//! Transfer channel adapter
//!
//! Wraps a single file's byte transfer to the remote blob store,
//! translating transport events into progress pushes and a published
//! state machine.

pub mod adapter;
pub mod types;

pub use adapter::{TransferAdapter, TransferHandle};
pub use types::TransferState;
