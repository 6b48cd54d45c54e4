//! Classification of workspace directory entries.

use std::path::Path;

use crate::domain::constants::{RULES_FILE_SUFFIX, is_reserved};

/// What a single directory entry means to the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A subdirectory to descend into.
    Directory,
    /// A rule fragment to merge.
    Fragment,
    /// A `.rules` file with a reserved output name; always skipped.
    ReservedFragment,
    /// The root template file.
    Template,
    /// Anything else.
    Ignored,
}

impl EntryKind {
    /// Classify `path`.
    ///
    /// `template_path` is the expected template location and is only passed
    /// for entries of the workspace root; template matching never happens in
    /// subdirectories. Precedence is directory, then fragment suffix, then
    /// template.
    pub fn classify(path: &Path, is_dir: bool, template_path: Option<&Path>) -> Self {
        if is_dir {
            return Self::Directory;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if name.ends_with(RULES_FILE_SUFFIX) {
            if is_reserved(&name) {
                return Self::ReservedFragment;
            }
            return Self::Fragment;
        }

        match template_path {
            Some(expected) if expected == path => Self::Template,
            _ => Self::Ignored,
        }
    }

    /// Short label used in trace output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Fragment => "fragment",
            Self::ReservedFragment => "reserved",
            Self::Template => "template",
            Self::Ignored => "ignored",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
