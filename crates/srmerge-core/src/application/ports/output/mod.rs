//! Driven (output) ports - implemented by infrastructure.

use std::io;
use std::path::Path;

use crate::error::SrMergeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `srmerge_adapters::filesystem::LocalFilesystem` (production)
/// - `srmerge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Reads return [`io::Result`] so the merger can attach the offending path;
/// every other fallible operation returns an adapter-built error that is
/// propagated unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the immediate entries of a directory, in listing order.
    fn list_dir(&self, path: &Path) -> SrMergeResult<Vec<String>>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SrMergeResult<()>;
}
