//! Remote session establishment interface

use crate::error::Result;
use async_trait::async_trait;

/// Provides the anonymous session required before any transfer starts
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Ensure an anonymous session exists
    ///
    /// Idempotent: calling this while a session is already established
    /// must succeed without side effects. A failure here aborts the
    /// whole submission with [`PipelineError::Session`].
    ///
    /// [`PipelineError::Session`]: crate::error::PipelineError::Session
    async fn ensure_anonymous_session(&self) -> Result<()>;
}
