//! Archiver port - compresses the deploy directory into one file

use std::path::Path;

use crate::domain::platform::ArchiveFormat;
use crate::error::PongpackResult;

/// What went into a freshly written archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Number of file entries
    pub files: usize,
    /// Size of the archive on disk
    pub bytes: u64,
}

pub trait Archiver {
    fn format(&self) -> ArchiveFormat;

    /// Write `archive_path` from the contents of `deploy_dir`.
    ///
    /// The caller removes any stale archive first.
    fn create(&self, deploy_dir: &Path, archive_path: &Path) -> PongpackResult<ArchiveSummary>;
}
