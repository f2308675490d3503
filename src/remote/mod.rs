//! Remote service interfaces
//!
//! The pipeline talks to three remote collaborators: a blob store that
//! receives file bytes, a document change feed that delivers processing
//! results, and a session provider. Each is a trait so callers supply
//! their own transport.

pub mod blob;
pub mod feed;
pub mod session;

pub use blob::{BlobStore, PutEvent, TransferStream};
pub use feed::{ChangeEvent, ChangeFeed, ChangeStream};
pub use session::SessionProvider;
