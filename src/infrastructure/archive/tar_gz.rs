//! Gzip tar archiver (Linux distributables)

use std::fs;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::platform::ArchiveFormat;
use crate::domain::ports::{ArchiveSummary, Archiver};
use crate::error::{PongpackError, PongpackResult};

/// Gzip-compressed tar holding the whole deploy directory under its own
/// base name, so extracting yields a single top-level `deploy/` folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzArchiver;

impl Archiver for TarGzArchiver {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::TarGz
    }

    fn create(&self, deploy_dir: &Path, archive_path: &Path) -> PongpackResult<ArchiveSummary> {
        let prefix = deploy_dir
            .file_name()
            .ok_or_else(|| PongpackError::Archive {
                path: archive_path.to_path_buf(),
                message: format!("{} has no directory name", deploy_dir.display()),
            })?
            .to_os_string();

        let file = fs::File::create(archive_path)?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        debug!(prefix = %prefix.to_string_lossy(), "adding deploy tree to tarball");
        builder.append_dir_all(&prefix, deploy_dir)?;

        let encoder = builder.into_inner()?;
        let file = encoder.finish()?;
        file.sync_all()?;

        Ok(ArchiveSummary {
            files: count_files(deploy_dir)?,
            bytes: fs::metadata(archive_path)?.len(),
        })
    }
}

fn count_files(dir: &Path) -> PongpackResult<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir).follow_links(true) {
        if entry?.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}
