//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use tracing::{trace, warn};
use walkdir::WalkDir;

use srmerge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SrMergeError, SrMergeResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Directory listings are sorted by file name so a merge produces the same
/// fragment order on every platform. Symbolic links to directories are
/// reported as non-directories and never descended into. Entries whose names
/// are not valid UTF-8 are skipped with a warning.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path)
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> SrMergeResult<Vec<String>> {
        let metadata = std::fs::metadata(path).map_err(|e| map_error(path, e, "list directory"))?;
        if !metadata.is_dir() {
            return Err(map_error(path, "Not a directory", "list directory"));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| map_error(path, e, "list directory"))?;
            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_owned()),
                None => warn!(
                    entry = %entry.path().display(),
                    "Skipping entry with a non UTF-8 name"
                ),
            }
        }

        trace!(dir = %path.display(), entries = names.len(), "Directory listed");
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> SrMergeResult<()> {
        std::fs::write(path, content).map_err(|e| map_error(path, e, "write file"))
    }
}

fn map_error(path: &Path, e: impl std::fmt::Display, operation: &str) -> SrMergeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
