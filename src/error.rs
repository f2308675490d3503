//! Error handling for the upload pipeline
//!
//! This module defines the error types used throughout the library.
//! Batch-level failures abort a submission; per-record failures stay
//! scoped to their task and are reported on its progress stream.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Error types that can occur when using the upload pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Anonymous session establishment failed; aborts the whole batch
    #[error("Session error: {message}")]
    Session { message: String },

    /// A single file's transfer failed; scoped to one task record
    #[error("Transfer failed: {message}")]
    Transfer { message: String },

    /// Best-effort remote cleanup failed; logged and swallowed
    #[error("Cleanup failed: {operation} - {message}")]
    Cleanup { operation: String, message: String },

    /// Invalid parameter
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// Create a new session error
    pub fn session(message: impl Into<String>) -> Self {
        PipelineError::Session {
            message: message.into(),
        }
    }

    /// Create a new transfer error
    pub fn transfer(message: impl Into<String>) -> Self {
        PipelineError::Transfer {
            message: message.into(),
        }
    }

    /// Create a new cleanup error
    pub fn cleanup(operation: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::Cleanup {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}
