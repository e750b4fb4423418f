//! Pongpack - release packaging for the Pong game
//!
//! Pongpack cleans previous outputs, drives CMake to produce a Release build,
//! stages the executable and its resources into a deploy directory, and
//! compresses that directory into a platform-named archive
//! (`pong_windows.zip` or `pong_linux.tar.gz`).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PackageOptions, PackageReport, PackageUseCase};
pub use config::{Config, LoadedConfig};
pub use domain::{ArchiveFormat, Os, PipelineStage, Platform, Workspace};
pub use error::{BuildStep, PongpackError, PongpackResult};
