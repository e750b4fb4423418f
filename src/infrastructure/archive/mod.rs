//! Archive writers for the two distributable formats

mod tar_gz;
mod zip_writer;

pub use tar_gz::TarGzArchiver;
pub use zip_writer::ZipArchiver;

use crate::domain::platform::ArchiveFormat;
use crate::domain::ports::Archiver;

/// Archiver for a platform's archive format
pub fn archiver_for(format: ArchiveFormat) -> Box<dyn Archiver> {
    match format {
        ArchiveFormat::Zip => Box::new(ZipArchiver),
        ArchiveFormat::TarGz => Box::new(TarGzArchiver),
    }
}
