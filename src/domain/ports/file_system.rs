//! FileSystem port - abstraction over the file operations the pipeline needs
//!
//! Keeps the use case independent of the local disk so cleaning and staging
//! can be exercised against fakes.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {0}")]
    NotFound(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach the path an `io::Error` happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test fakes that inject failures
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Recursively delete a directory
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents (no error if it exists)
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy one file, preserving permissions and modification time
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<u64>;

    /// Recursively copy `from` into `to`, overwriting files that already exist.
    ///
    /// Returns the number of files copied.
    fn copy_dir_merge(&self, from: &Path, to: &Path) -> FsResult<usize>;

    /// Compute content hash (`sha256:<hex>`)
    fn hash(&self, path: &Path) -> FsResult<String>;
}
