//! Unified error handling for srmerge Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for srmerge Core operations.
///
/// Every variant is fatal for the merge that raised it; nothing in the core
/// retries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SrMergeError {
    /// Discovery rule violations (template/fragment invariants).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O and orchestration failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SrMergeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in srmerge".into(),
                "Please report this issue with the command that triggered it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type SrMergeResult<T> = Result<T, SrMergeError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: SrMergeError = DomainError::TemplateNotFound {
            template: "firestore.rules.template".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Cannot find SR template: firestore.rules.template."
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn read_failures_are_internal() {
        let err: SrMergeError = ApplicationError::FileReadFailed {
            path: PathBuf::from("/ws/a.rules"),
            reason: "permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("/ws/a.rules"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn internal_suggests_reporting() {
        let err = SrMergeError::Internal {
            message: "worker panicked".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("report")));
    }
}
