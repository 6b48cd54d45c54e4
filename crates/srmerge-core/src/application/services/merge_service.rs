//! Rule Merger - main application orchestrator.
//!
//! This service coordinates the entire merge workflow:
//! 1. Locate the template and fragments
//! 2. Read every fragment (concurrently) and the template
//! 3. Splice the joined, indented fragments into the template
//! 4. Write the result to the output file
//!
//! Nothing is written unless every read succeeded.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::RuleFileLocator},
    domain::{RuleFileSet, Splice, join_fragments, splice},
    error::{SrMergeError, SrMergeResult},
};

/// Summary of a completed merge, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub output_path: PathBuf,
    pub template: PathBuf,
    pub fragments: Vec<PathBuf>,
    /// `false` when the template had no trailing closers and was copied as is.
    pub spliced: bool,
    pub bytes_written: usize,
}

/// Merged rules that have not been written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRules {
    pub rule_files: RuleFileSet,
    pub splice: Splice,
}

impl RenderedRules {
    pub fn content(&self) -> &str {
        self.splice.content()
    }
}

/// Main merge service.
pub struct RuleMerger {
    filesystem: Box<dyn Filesystem>,
    parallel_reads: bool,
}

impl RuleMerger {
    /// Create a new merger over the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            parallel_reads: true,
        }
    }

    /// Read fragments on worker threads (default) or one after another.
    pub fn parallel_reads(mut self, enabled: bool) -> Self {
        self.parallel_reads = enabled;
        self
    }

    /// Merge the fragments of `workspace` into `workspace/output_name`,
    /// overwriting any existing file.
    ///
    /// Read failures abort before anything is written. Write failures are
    /// returned exactly as the adapter reported them.
    #[instrument(
        skip_all,
        fields(
            workspace = %workspace.as_ref().display(),
            template = %template_name,
            output = %output_name
        )
    )]
    pub fn merge(
        &self,
        workspace: impl AsRef<Path>,
        template_name: &str,
        output_name: &str,
    ) -> SrMergeResult<MergeReport> {
        let workspace = workspace.as_ref();
        let rendered = self.render(workspace, template_name)?;

        let output_path = workspace.join(output_name);
        self.filesystem
            .write_file(&output_path, rendered.content())?;

        info!(
            output = %output_path.display(),
            fragments = rendered.rule_files.fragments().len(),
            "Merge completed successfully"
        );

        let spliced = rendered.splice.is_spliced();
        let bytes_written = rendered.content().len();
        let (template, fragments) = rendered.rule_files.into_parts();

        Ok(MergeReport {
            output_path,
            template,
            fragments,
            spliced,
            bytes_written,
        })
    }

    /// Produce the merged rules without writing them.
    pub fn render(
        &self,
        workspace: impl AsRef<Path>,
        template_name: &str,
    ) -> SrMergeResult<RenderedRules> {
        let rule_files =
            RuleFileLocator::new(self.filesystem.as_ref()).locate(workspace, template_name)?;

        let contents = self.read_fragments(rule_files.fragments())?;
        let merged = join_fragments(&contents);
        let template = self.read_rule_file(rule_files.template())?;

        let splice = splice::splice(&template, &merged);
        if !splice.is_spliced() {
            warn!(
                template = %rule_files.template().display(),
                "Template has no trailing closing braces, content left unmodified"
            );
        }

        Ok(RenderedRules { rule_files, splice })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Read all fragments; the result is in `paths` order regardless of which
    /// read finishes first.
    fn read_fragments(&self, paths: &[PathBuf]) -> SrMergeResult<Vec<String>> {
        let workers = if self.parallel_reads {
            thread::available_parallelism()
                .map_or(1, NonZeroUsize::get)
                .min(paths.len())
        } else {
            1
        };

        if workers <= 1 {
            return paths.iter().map(|path| self.read_rule_file(path)).collect();
        }

        // Contiguous chunks, joined in spawn order, keep the index order.
        let chunk_size = paths.len().div_ceil(workers);
        debug!(workers, chunk_size, "Reading fragments concurrently");

        thread::scope(|scope| -> SrMergeResult<Vec<String>> {
            let handles: Vec<_> = paths
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|path| self.read_rule_file(path))
                            .collect::<SrMergeResult<Vec<_>>>()
                    })
                })
                .collect();

            let mut contents = Vec::with_capacity(paths.len());
            for handle in handles {
                let chunk = handle.join().map_err(|_| SrMergeError::Internal {
                    message: "fragment reader thread panicked".into(),
                })??;
                contents.extend(chunk);
            }
            Ok(contents)
        })
    }

    fn read_rule_file(&self, path: &Path) -> SrMergeResult<String> {
        self.filesystem.read_to_string(path).map_err(|e| {
            ApplicationError::FileReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
