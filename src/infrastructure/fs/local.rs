//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::ports::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        debug!(path = %path.display(), "removing directory tree");
        fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        debug!(path = %path.display(), "removing file");
        fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<u64> {
        debug!(from = %from.display(), to = %to.display(), "copying file");
        // fs::copy carries permission bits; mtime is restored separately
        let bytes = fs::copy(from, to).map_err(|e| FsError::at(from, e))?;
        let modified = fs::metadata(from)
            .and_then(|m| m.modified())
            .map_err(|e| FsError::at(from, e))?;
        // Read-only copies cannot always be reopened for writing; the
        // timestamp is then left as-is rather than failing the copy.
        let restored = fs::File::options()
            .write(true)
            .open(to)
            .or_else(|_| fs::File::open(to))
            .and_then(|f| f.set_modified(modified));
        if let Err(e) = restored {
            warn!(path = %to.display(), error = %e, "could not preserve modification time");
        }
        Ok(bytes)
    }

    fn copy_dir_merge(&self, from: &Path, to: &Path) -> FsResult<usize> {
        debug!(from = %from.display(), to = %to.display(), "merging directory tree");
        let mut copied = 0;

        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(from).to_path_buf();
                match e.into_io_error() {
                    Some(io) => FsError::at(&path, io),
                    None => FsError::Io {
                        path,
                        source: std::io::Error::other("filesystem loop"),
                    },
                }
            })?;

            let rel = entry
                .path()
                .strip_prefix(from)
                .unwrap_or_else(|_| entry.path());
            let target = to.join(rel);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    self.create_dir_all(parent)?;
                }
                self.copy_file(entry.path(), &target)?;
                copied += 1;
            }
        }

        Ok(copied)
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let mut file = fs::File::open(path).map_err(|e| FsError::at(path, e))?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(|e| FsError::at(path, e))?;
        Ok(format!("sha256:{:x}", hasher.finalize()))
    }
}
