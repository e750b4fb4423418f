//! Package Module
//!
//! Builds the game and turns the result into a distributable archive.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`PackageOptions`)
//! - `result` - Result types (`PackageReport`, `StagedFiles`, `ArchiveInfo`)
//! - `use_case` - Core use case logic (`PackageUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use pongpack::application::package::{PackageOptions, PackageUseCase};
//!
//! let use_case = PackageUseCase::new(fs, build_tool, archiver, Platform::host());
//! let report = use_case.execute(&PackageOptions::new(workspace), &NoopEventSink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::PackageOptions;
pub use result::{ArchiveInfo, PackageReport, StagedFiles};
pub use use_case::PackageUseCase;
