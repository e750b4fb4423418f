//! Error types for Pongpack
//!
//! Library code returns `PongpackError` (thiserror); the binary wraps it in
//! `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::layout::LayoutError;
use crate::domain::ports::FsError;

/// Result type alias for Pongpack operations
pub type PongpackResult<T> = Result<T, PongpackError>;

/// Which external build step was running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Configure,
    Build,
}

impl std::fmt::Display for BuildStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStep::Configure => write!(f, "configuration"),
            BuildStep::Build => write!(f, "build"),
        }
    }
}

/// Main error type for Pongpack operations
#[derive(Error, Debug)]
pub enum PongpackError {
    /// A directory exists but could not be removed
    #[error("failed to delete {label} directory: {source}")]
    Clean {
        label: String,
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The build tool ran and exited with a failure status
    #[error("{step} step failed: '{program}' exited with {}", exit_status(.code))]
    ToolFailed {
        step: BuildStep,
        program: String,
        code: Option<i32>,
    },

    /// The build tool could not be started at all
    #[error("{step} step failed: could not run '{program}': {source}")]
    ToolSpawn {
        step: BuildStep,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Built executable is not where the build should have put it
    #[error("executable not found at {path}. Please check build configuration.")]
    ExecutableNotFound { path: PathBuf },

    /// Copying into the deploy directory failed
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },

    /// Archive could not be written
    #[error("failed to create archive {path}: {message}")]
    Archive { path: PathBuf, message: String },

    /// Zip encoder error
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory walk error
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Output directories would overlap the project files
    #[error("unsafe directory layout: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File system port error outside of cleaning and staging
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
