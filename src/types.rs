//! Input types for batch submission

use crate::error::{PipelineError, Result};
use std::path::Path;

/// A local file handle selected for upload
///
/// Carries the original filename (display-only), the declared MIME
/// content type used by the submission filter, and the file contents.
#[derive(Debug, Clone)]
pub struct LocalFile {
    /// Original filename, display-only
    pub name: String,
    /// Declared MIME type, e.g. "audio/wav"
    pub content_type: String,
    /// File contents handed to the blob store
    pub data: Vec<u8>,
}

impl LocalFile {
    /// Create a local file from in-memory contents
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Read a local file from disk
    ///
    /// The filename is taken from the last path component; the content
    /// type must be declared by the caller.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to an existing file
    /// * `content_type` - Declared MIME type for the file
    pub fn from_path(path: impl AsRef<Path>, content_type: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PipelineError::invalid_parameter(
                "path",
                format!("File does not exist: {}", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let data = std::fs::read(path)?;

        Ok(Self {
            name,
            content_type: content_type.into(),
            data,
        })
    }

    /// Size of the file contents in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
