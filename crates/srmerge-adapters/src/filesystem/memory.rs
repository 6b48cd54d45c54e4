//! In-memory filesystem adapter for testing.
//!
//! Directory listings keep insertion order, and [`MemoryFilesystem::add_file`]
//! records a listing entry on every call, so fixtures can reproduce duplicate
//! names in one directory (as a case-insensitive volume would list them).

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use srmerge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SrMergeResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    listings: HashMap<PathBuf, Vec<String>>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    /// Create `path` and its ancestors, listing each new directory in its
    /// parent.
    fn ensure_dir(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            let parent = current.clone();
            current.push(component);

            if !self.directories.insert(current.clone()) {
                continue;
            }
            self.listings.entry(current.clone()).or_default();

            if let Some(name) = current.file_name() {
                if !parent.as_os_str().is_empty() {
                    self.listings
                        .entry(parent)
                        .or_default()
                        .push(name.to_string_lossy().into_owned());
                }
            }
        }
    }

    fn list_in_parent(&mut self, path: &Path) {
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.listings
                .entry(parent.to_path_buf())
                .or_default()
                .push(name.to_string_lossy().into_owned());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a directory and all parent directories.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        self.write_guard().ensure_dir(path.as_ref());
        self
    }

    /// Add a file, creating parent directories.
    ///
    /// Every call appends a listing entry, even for a path already present.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) -> &Self {
        let path = path.as_ref();
        let mut inner = self.write_guard();

        if let Some(parent) = path.parent() {
            inner.ensure_dir(parent);
        }
        inner.list_in_parent(path);
        inner.files.insert(path.to_path_buf(), content.into());
        drop(inner);
        self
    }

    /// Make reads of `path` fail with `PermissionDenied`.
    pub fn mark_unreadable(&self, path: impl AsRef<Path>) -> &Self {
        self.write_guard()
            .unreadable
            .insert(path.as_ref().to_path_buf());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_guard().files.get(path.as_ref()).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read_guard().files.keys().cloned().collect()
    }

    /// Guards recover from poisoning; every mutation leaves the maps
    /// consistent, so a panicking test thread cannot corrupt them.
    fn read_guard(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_guard();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read_guard().directories.contains(path)
    }

    fn list_dir(&self, path: &Path) -> SrMergeResult<Vec<String>> {
        let inner = self.read_guard();

        inner.listings.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into()
        })
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let inner = self.read_guard();

        if inner.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        inner.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory")
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SrMergeResult<()> {
        let mut inner = self.write_guard();

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        if !inner.files.contains_key(path) {
            inner.list_in_parent(path);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
