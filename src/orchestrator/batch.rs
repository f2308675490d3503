//! Batch submission implementation

use crate::error::Result;
use crate::orchestrator::filter::is_excluded_content_type;
use crate::remote::{BlobStore, ChangeFeed, SessionProvider};
use crate::task::{ProgressChannel, ProgressGauge, TaskRecord};
use crate::transfer::TransferAdapter;
use crate::types::LocalFile;
use crate::watcher::CompletionWatcher;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

/// Builds and wires one task record per accepted file
///
/// All remote collaborators are injected, including the session
/// provider; the orchestrator holds no ambient state of its own.
pub struct UploadOrchestrator {
    blobs: Arc<dyn BlobStore>,
    feed: Arc<dyn ChangeFeed>,
    session: Arc<dyn SessionProvider>,
}

impl UploadOrchestrator {
    /// Create an orchestrator over the given remote services
    pub fn new(
        blobs: Arc<dyn BlobStore>,
        feed: Arc<dyn ChangeFeed>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            blobs,
            feed,
            session,
        }
    }

    /// Submit a batch of local files for remote processing
    ///
    /// Resolves once every record is constructed and its transfer has
    /// started, not when transfers complete. Files with an excluded
    /// content type are silently skipped. Returns the accepted records
    /// in input order, each with a distinct id; the returned collection
    /// is never mutated afterwards.
    ///
    /// # Errors
    ///
    /// Fails with [`PipelineError::Session`] if anonymous session
    /// establishment fails; no records are created in that case.
    /// Per-file transfer errors never fail the submission — they
    /// surface on the affected record's progress stream.
    ///
    /// [`PipelineError::Session`]: crate::error::PipelineError::Session
    pub async fn submit(&self, files: Vec<LocalFile>) -> Result<Vec<Arc<TaskRecord>>> {
        // The session check runs even for an empty batch; it is
        // idempotent on the provider side.
        self.session.ensure_anonymous_session().await?;

        let mut records = Vec::with_capacity(files.len());

        for file in files {
            if is_excluded_content_type(&file.content_type) {
                debug!(
                    "skipping {} ({}): excluded content type",
                    file.name, file.content_type
                );
                continue;
            }

            let id = Uuid::new_v4();
            let progress = ProgressChannel::default();
            let gauge = ProgressGauge::new();

            let events = self.blobs.put(id, file.data);
            let adapter = TransferAdapter::new(progress.clone(), gauge.clone());
            let transfer = adapter.spawn(id, events);

            let record = Arc::new(TaskRecord::new(file.name, id, transfer, progress, gauge));
            CompletionWatcher::spawn(record.clone(), self.feed.clone(), self.blobs.clone());

            debug!("task {} created for {}", id, record.name());
            records.push(record);
        }

        info!("submitted batch of {} task(s)", records.len());
        Ok(records)
    }
}
