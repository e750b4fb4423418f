//! Ports - interfaces the application layer depends on

pub mod archiver;
pub mod build_tool;
pub mod file_system;
pub mod pipeline_events;

pub use archiver::{ArchiveSummary, Archiver};
pub use build_tool::{BuildRequest, BuildTool, ConfigureRequest};
pub use file_system::{FileSystem, FsError, FsResult};
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
