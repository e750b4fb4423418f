//! Pipeline Event Port
//!
//! Provides an observable interface for the packaging pipeline.
//! Enables console progress, JSON event streams, and silent runs.

use std::path::PathBuf;

use crate::domain::platform::ArchiveFormat;
use crate::domain::stage::PipelineStage;

/// Event emitted while the pipeline runs
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A stage is about to run
    StageStarted { stage: PipelineStage },

    /// A stage finished successfully
    StageCompleted { stage: PipelineStage },

    /// An existing directory is about to be deleted
    DeletingDirectory { label: String, path: PathBuf },

    /// An existing directory was deleted
    DirectoryCleaned { label: String, path: PathBuf },

    /// The executable was found in the build output
    ExecutableLocated { path: PathBuf },

    /// Resource tree copied into the deploy directory
    ResourcesCopied { from: PathBuf, files: usize },

    /// No resources directory; packaging continues without it
    ResourcesMissing { path: PathBuf },

    /// A stale archive from a previous run was removed
    StaleArchiveRemoved { path: PathBuf },

    /// Archive written
    ArchiveCreated {
        path: PathBuf,
        format: ArchiveFormat,
        files: usize,
        bytes: u64,
    },

    /// A stage failed; the pipeline stops
    Failed { stage: PipelineStage, message: String },
}

/// Trait for receiving pipeline events
///
/// Implementations:
/// - ConsoleEventSink: human-readable progress
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait PipelineEventSink {
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}

impl<T: PipelineEventSink + ?Sized> PipelineEventSink for &T {
    fn on_event(&self, event: PipelineEvent) {
        (**self).on_event(event)
    }
}
