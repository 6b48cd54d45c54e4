//! The discovered template and fragment files of a workspace.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Result of rule discovery: one template and an ordered, non-empty list of
/// fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFileSet {
    template: PathBuf,
    fragments: Vec<PathBuf>,
}

impl RuleFileSet {
    pub fn builder() -> RuleFileSetBuilder {
        RuleFileSetBuilder::default()
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    /// Fragment paths in discovery order.
    pub fn fragments(&self) -> &[PathBuf] {
        &self.fragments
    }

    pub fn into_parts(self) -> (PathBuf, Vec<PathBuf>) {
        (self.template, self.fragments)
    }
}

/// Accumulates discovery results while walking the workspace.
///
/// Enforces the template uniqueness invariant as entries arrive and the
/// existence invariants on [`RuleFileSetBuilder::build`].
#[derive(Debug, Default)]
pub struct RuleFileSetBuilder {
    template: Option<PathBuf>,
    fragments: Vec<PathBuf>,
}

impl RuleFileSetBuilder {
    /// Record the template. A second record is an error.
    pub fn record_template(
        &mut self,
        path: impl Into<PathBuf>,
        template_name: &str,
    ) -> Result<(), DomainError> {
        if self.template.is_some() {
            return Err(DomainError::MultipleTemplates {
                template: template_name.to_string(),
            });
        }
        self.template = Some(path.into());
        Ok(())
    }

    pub fn push_fragment(&mut self, path: impl Into<PathBuf>) {
        self.fragments.push(path.into());
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Finish discovery.
    ///
    /// A missing template is reported before missing fragments.
    pub fn build(self, template_name: &str) -> Result<RuleFileSet, DomainError> {
        let template = self.template.ok_or_else(|| DomainError::TemplateNotFound {
            template: template_name.to_string(),
        })?;

        if self.fragments.is_empty() {
            return Err(DomainError::NoRuleFilesToMerge);
        }

        Ok(RuleFileSet {
            template,
            fragments: self.fragments,
        })
    }
}
