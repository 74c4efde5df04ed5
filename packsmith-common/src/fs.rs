//! Filesystem writer capability
//!
//! The build pipeline never touches `std::fs` directly — every directory
//! creation and file write goes through [`Writer`]. This keeps the sample
//! merging and field inference code pure, and lets tests capture output
//! with [`MemoryWriter`] instead of a real directory tree.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

/// Capability for the filesystem effects of a package build.
pub trait Writer: Send + Sync {
    /// Create a directory and all of its parents if missing.
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writer backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl FsWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Writer for FsWriter {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}

/// Writer that records everything in memory.
///
/// Used by tests to assert on what a build would have written without
/// touching disk. Paths are stored as given; directory creations are
/// tracked separately from file writes.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<Vec<PathBuf>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written to `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// All file paths written, in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    /// All directories that were ensured, in call order.
    pub fn dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }

    /// Number of files written.
    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.files.lock().unwrap().is_empty()
    }
}

impl Writer for MemoryWriter {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
