//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let json = match event {
            PipelineEvent::StageStarted { stage } => serde_json::json!({
                "event": "stage_start",
                "stage": stage,
            }),

            PipelineEvent::StageCompleted { stage } => serde_json::json!({
                "event": "stage_complete",
                "stage": stage,
            }),

            PipelineEvent::DeletingDirectory { label, path } => serde_json::json!({
                "event": "deleting",
                "label": label,
                "path": path.display().to_string(),
            }),

            PipelineEvent::DirectoryCleaned { label, path } => serde_json::json!({
                "event": "cleaned",
                "label": label,
                "path": path.display().to_string(),
            }),

            PipelineEvent::ExecutableLocated { path } => serde_json::json!({
                "event": "executable",
                "path": path.display().to_string(),
            }),

            PipelineEvent::ResourcesCopied { from, files } => serde_json::json!({
                "event": "resources_copied",
                "from": from.display().to_string(),
                "files": files,
            }),

            PipelineEvent::ResourcesMissing { path } => serde_json::json!({
                "event": "warning",
                "kind": "resources_missing",
                "path": path.display().to_string(),
            }),

            PipelineEvent::StaleArchiveRemoved { path } => serde_json::json!({
                "event": "stale_archive_removed",
                "path": path.display().to_string(),
            }),

            PipelineEvent::ArchiveCreated {
                path,
                format,
                files,
                bytes,
            } => serde_json::json!({
                "event": "archive",
                "path": path.display().to_string(),
                "format": format.to_string(),
                "files": files,
                "bytes": bytes,
            }),

            PipelineEvent::Failed { stage, message } => serde_json::json!({
                "event": "stage_failed",
                "stage": stage,
                "message": message,
            }),
        };

        self.write_event(json);
    }
}
