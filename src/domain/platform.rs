//! Platform capability descriptor
//!
//! All host-specific behavior (executable suffix, archive format, output
//! subdirectory probing, pause-on-exit) is captured here once at startup.

use serde::{Deserialize, Serialize};

/// Operating system family relevant to packaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    Unix,
}

/// Archive encoding used for the distributable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveFormat {
    /// Deflate-compressed zip, entries relative to the deploy root
    Zip,
    /// Gzip-compressed tar, entries prefixed by the deploy directory name
    TarGz,
}

impl ArchiveFormat {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::TarGz => "tar.gz",
        }
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Host platform capabilities, selected once via [`Platform::host`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub executable_suffix: &'static str,
    pub archive_format: ArchiveFormat,
    /// Build-output subdirectories to probe, in preference order
    pub probe_subdirs: &'static [&'static str],
    pub pause_on_exit: bool,
}

impl Platform {
    pub fn windows() -> Self {
        Self {
            os: Os::Windows,
            executable_suffix: ".exe",
            archive_format: ArchiveFormat::Zip,
            probe_subdirs: &["Release", "Debug"],
            pause_on_exit: true,
        }
    }

    pub fn unix() -> Self {
        Self {
            os: Os::Unix,
            executable_suffix: "",
            archive_format: ArchiveFormat::TarGz,
            probe_subdirs: &[],
            pause_on_exit: false,
        }
    }

    /// Descriptor for the platform this binary was compiled for
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::unix()
        }
    }

    /// Label used in archive names (`windows` / `linux`)
    pub fn archive_label(&self) -> &'static str {
        match self.os {
            Os::Windows => "windows",
            Os::Unix => "linux",
        }
    }

    /// `pong` -> `pong.exe` on Windows, `pong` elsewhere
    pub fn executable_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.executable_suffix)
    }

    /// `pong` -> `pong_windows.zip` / `pong_linux.tar.gz`
    pub fn archive_file_name(&self, stem: &str) -> String {
        format!(
            "{}_{}.{}",
            stem,
            self.archive_label(),
            self.archive_format.extension()
        )
    }
}
