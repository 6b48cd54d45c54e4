// ============================================================================
// domain/error.rs - DISCOVERY ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Violations of the workspace invariants enforced during rule discovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Not Found
    // ========================================================================
    #[error("Cannot find SR template: {template}.")]
    TemplateNotFound { template: String },

    #[error("No rule files to merge.")]
    NoRuleFilesToMerge,

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Multiple SR template files found: {template}. Cannot proceed.")]
    MultipleTemplates { template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { template } => vec![
                format!("Expected '{}' directly inside the workspace root", template),
                "The template is not searched for in subdirectories".into(),
                "Check the --root_sr_template value".into(),
            ],
            Self::NoRuleFilesToMerge => vec![
                "Add at least one '*.rules' fragment anywhere in the workspace".into(),
                "'firestore.rules' and 'storage.rules' are never merged".into(),
            ],
            Self::MultipleTemplates { template } => vec![
                format!("More than one entry named '{}' was listed", template),
                "Check for case-insensitive name collisions in the workspace root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::NoRuleFilesToMerge => ErrorCategory::NotFound,
            Self::MultipleTemplates { .. } => ErrorCategory::Validation,
        }
    }
}
