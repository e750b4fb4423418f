//! Executable lookup in platform-specific build output layouts

use std::path::{Path, PathBuf};

use crate::domain::platform::Platform;
use crate::domain::ports::FileSystem;

/// Where the build should have put the executable.
///
/// Multi-config generators (Visual Studio) place binaries under a per-config
/// subdirectory, so each of `platform.probe_subdirs` is tried in order. The
/// first existing candidate wins. With no hit, the bare `build_dir/<name>`
/// path is returned even if it does not exist; the caller checks existence.
///
/// Release is preferred over Debug without looking at timestamps, so a stale
/// Release binary from an earlier run shadows a fresh Debug one.
pub fn locate_executable<FS: FileSystem + ?Sized>(
    fs: &FS,
    platform: &Platform,
    build_dir: &Path,
    executable_stem: &str,
) -> PathBuf {
    let name = platform.executable_name(executable_stem);

    for subdir in platform.probe_subdirs {
        let candidate = build_dir.join(subdir).join(&name);
        if fs.exists(&candidate) {
            return candidate;
        }
    }

    build_dir.join(name)
}
