//! Rule File Locator - discovers the template and fragments of a workspace.
//!
//! Walks the workspace depth-first in directory-listing order:
//! 1. Subdirectories are descended into where they appear in the listing
//! 2. `*.rules` files are collected, except the reserved output names
//! 3. The template is matched by name in the workspace root only

use std::path::Path;

use tracing::{debug, info, instrument, trace};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{EntryKind, RuleFileSet, RuleFileSetBuilder},
    error::SrMergeResult,
};

/// Discovers rule files through a [`Filesystem`] port.
pub struct RuleFileLocator<'fs> {
    filesystem: &'fs dyn Filesystem,
}

impl<'fs> RuleFileLocator<'fs> {
    pub fn new(filesystem: &'fs dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Locate the template named `template_name` and every fragment below
    /// `workspace`.
    ///
    /// # Errors
    ///
    /// - `WorkspaceNotFound` if `workspace` does not exist (nothing is listed)
    /// - `MultipleTemplates` as soon as a second template entry is listed
    /// - `TemplateNotFound` if the root holds no template
    /// - `NoRuleFilesToMerge` if the whole tree holds no fragment
    #[instrument(
        skip_all,
        fields(
            workspace = %workspace.as_ref().display(),
            template = %template_name
        )
    )]
    pub fn locate(
        &self,
        workspace: impl AsRef<Path>,
        template_name: &str,
    ) -> SrMergeResult<RuleFileSet> {
        let workspace = workspace.as_ref();

        if !self.filesystem.exists(workspace) {
            return Err(ApplicationError::WorkspaceNotFound {
                path: workspace.to_path_buf(),
            }
            .into());
        }

        let mut builder = RuleFileSet::builder();
        self.scan(workspace, template_name, true, &mut builder)?;
        let rule_files = builder.build(template_name)?;

        info!(
            fragments = rule_files.fragments().len(),
            template = %rule_files.template().display(),
            "Rule files located"
        );
        Ok(rule_files)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Classify every entry of `dir`, descending into subdirectories.
    ///
    /// Nested calls come from a previous listing, so existence is not
    /// re-checked and the template is never matched.
    fn scan(
        &self,
        dir: &Path,
        template_name: &str,
        is_root: bool,
        builder: &mut RuleFileSetBuilder,
    ) -> SrMergeResult<()> {
        let template_path = is_root.then(|| dir.join(template_name));

        for name in self.filesystem.list_dir(dir)? {
            let path = dir.join(&name);
            let kind = EntryKind::classify(
                &path,
                self.filesystem.is_dir(&path),
                template_path.as_deref(),
            );
            debug!(entry = %path.display(), %kind, "Current file classified");

            match kind {
                EntryKind::Directory => {
                    let before = builder.fragment_count();
                    self.scan(&path, template_name, false, builder)?;
                    trace!(
                        dir = %path.display(),
                        found = builder.fragment_count() - before,
                        "Subdirectory scanned"
                    );
                }
                EntryKind::Fragment => builder.push_fragment(path),
                EntryKind::Template => builder.record_template(path, template_name)?,
                EntryKind::ReservedFragment | EntryKind::Ignored => {}
            }
        }

        Ok(())
    }
}
