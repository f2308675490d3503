//! Submission content-type filter

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Content types the ingestion service treats as already-processed
/// inputs; files declaring one of these are skipped at submission.
static EXCLUDED_CONTENT_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["audio/mpeg", "audio/x-m4a", "audio/mp4", "audio/mp3"]
        .into_iter()
        .collect()
});

/// Whether a declared content type is rejected at submission
///
/// Rejected files are silently skipped: no task record is produced and
/// no error is raised. All other declared types are accepted.
pub fn is_excluded_content_type(content_type: &str) -> bool {
    EXCLUDED_CONTENT_TYPES.contains(content_type)
}
