//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O and process operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `build/` - External build tool (CMake)
//! - `archive/` - Zip and gzip-tar writers
//! - `events/` - Event sinks (JSON)

pub mod archive;
pub mod build;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use archive::{archiver_for, TarGzArchiver, ZipArchiver};
pub use build::{CMakeTool, ToolOutput};
pub use events::JsonEventSink;
pub use fs::LocalFs;
