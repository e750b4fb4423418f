//! Package result types

use std::path::PathBuf;

use crate::domain::platform::ArchiveFormat;
use crate::domain::stage::PipelineStage;

/// What `stage` put into the deploy directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFiles {
    /// Executable as found in the build output
    pub executable_source: PathBuf,
    /// Copy inside `deploy/bin/`
    pub executable: PathBuf,
    /// Number of resource files copied, `None` when there was no resources tree
    pub resources: Option<usize>,
}

/// The finished distributable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    /// Absolute path of the archive
    pub path: PathBuf,
    pub format: ArchiveFormat,
    pub files: usize,
    pub bytes: u64,
    /// `sha256:<hex>` of the archive file
    pub digest: String,
}

/// Result of a successful pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub staged: StagedFiles,
    pub archive: ArchiveInfo,
    /// Stages that ran, in order
    pub stages: Vec<PipelineStage>,
}

impl PackageReport {
    pub fn archive_path(&self) -> &std::path::Path {
        &self.archive.path
    }
}
