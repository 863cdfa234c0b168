//! Mtime lookup for cache-busting query strings.
//!
//! A file that cannot be statted simply has no timestamp; callers fall back
//! to an unversioned URL.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of last-modified timestamps.
pub trait FileMetadata {
    /// Seconds since the UNIX epoch, or `None` if the file cannot be statted.
    fn last_modified(&self, path: &Path) -> Option<u64>;
}

/// Reads timestamps from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMetadata;

impl FileMetadata for FsMetadata {
    fn last_modified(&self, path: &Path) -> Option<u64> {
        get_mtime(path).and_then(to_unix_secs)
    }
}

/// Filesystem timestamps with relative paths resolved against `root`.
///
/// The CLI uses the manifest directory as root so lookups do not depend on
/// the working directory.
#[derive(Debug, Clone)]
pub struct RootedMetadata {
    root: PathBuf,
}

impl RootedMetadata {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileMetadata for RootedMetadata {
    fn last_modified(&self, path: &Path) -> Option<u64> {
        FsMetadata.last_modified(&self.root.join(path))
    }
}

impl<T: FileMetadata + ?Sized> FileMetadata for &T {
    fn last_modified(&self, path: &Path) -> Option<u64> {
        (**self).last_modified(path)
    }
}

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read
fn get_mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}

/// Whole seconds since the epoch; `None` for pre-epoch clocks.
fn to_unix_secs(time: SystemTime) -> Option<u64> {
    time.duration_since(UNIX_EPOCH).ok().map(|d| d.as_secs())
}
