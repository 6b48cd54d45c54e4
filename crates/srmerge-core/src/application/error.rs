//! Application layer errors.
//!
//! These errors represent I/O and orchestration failures. Discovery rule
//! violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during merge orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The workspace root does not exist.
    #[error("Workspace directory does not exist: {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// A template or fragment could not be read.
    #[error("Reading file failed: {path} by {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    /// Any other filesystem operation failed (listing, writing).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceNotFound { path } => vec![
                format!("No directory at: {}", path.display()),
                "Check the --workspace_path value".into(),
            ],
            Self::FileReadFailed { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file is readable UTF-8 text".into(),
                "No output file was written".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. } => ErrorCategory::NotFound,
            Self::FileReadFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
