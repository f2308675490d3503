//! Completion watcher
//!
//! One-shot subscriber correlating a task record with its out-of-band
//! processing result.

pub mod completion;

pub use completion::CompletionWatcher;
