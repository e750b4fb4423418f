//! Zip archiver (Windows distributables)

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::platform::ArchiveFormat;
use crate::domain::ports::{ArchiveSummary, Archiver};
use crate::error::{PongpackError, PongpackResult};

/// Deflate-compressed zip whose entries are relative to the deploy root.
///
/// Only files get entries; directories are implied by the file paths, so an
/// empty directory in the deploy tree does not appear in the archive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Zip
    }

    fn create(&self, deploy_dir: &Path, archive_path: &Path) -> PongpackResult<ArchiveSummary> {
        let file = fs::File::create(archive_path)?;
        let mut zip = ZipWriter::new(file);
        let mut files = 0;

        for entry in WalkDir::new(deploy_dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name = entry_name(deploy_dir, path).ok_or_else(|| PongpackError::Archive {
                path: archive_path.to_path_buf(),
                message: format!("{} is outside {}", path.display(), deploy_dir.display()),
            })?;

            debug!(entry = %name, "adding zip entry");
            zip.start_file(name, file_options(path)?)?;
            let mut rf = fs::File::open(path)?;
            io::copy(&mut rf, &mut zip)?;
            files += 1;
        }

        zip.finish()?.flush()?;

        Ok(ArchiveSummary {
            files,
            bytes: fs::metadata(archive_path)?.len(),
        })
    }
}

/// Archive-internal name: relative to `root`, always `/`-separated
fn entry_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let name = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn file_options(path: &Path) -> PongpackResult<FileOptions<'static, ()>> {
    let options = FileOptions::<()>::default().compression_method(CompressionMethod::Deflated);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path)?.permissions().mode();
        options.unix_permissions(mode & 0o777)
    };
    #[cfg(not(unix))]
    let _ = path;

    Ok(options)
}
