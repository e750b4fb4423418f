//! Console Event Sink
//!
//! Human-readable progress lines for the packaging pipeline.

use std::io::{self, Write};
use std::sync::Mutex;

use pongpack::domain::ports::{PipelineEvent, PipelineEventSink};
use pongpack::PipelineStage;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, icon: Icon, text: String) {
        let icon = icon.colored(self.ui.color, self.ui.unicode);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{} {}", icon, text);
            let _ = writer.flush();
        }
    }

    fn detail(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(
                writer,
                "  {} {}",
                Icon::Arrow.colored(self.ui.color, self.ui.unicode),
                ColoredText::dim(text).render(self.ui.color)
            );
            let _ = writer.flush();
        }
    }
}

fn started_message(stage: PipelineStage) -> Option<&'static str> {
    match stage {
        PipelineStage::Configure => Some("Configuring the project..."),
        PipelineStage::Build => Some("Building the project..."),
        PipelineStage::MakeDeployDir => Some("Preparing deployment archive..."),
        _ => None,
    }
}

fn completed_message(stage: PipelineStage) -> Option<&'static str> {
    match stage {
        PipelineStage::Configure => Some("Configuration completed successfully."),
        PipelineStage::Build => Some("Build completed successfully."),
        _ => None,
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::StageStarted { stage } => {
                if let Some(message) = started_message(stage) {
                    self.line(
                        Icon::Progress,
                        ColoredText::info(message).bold().render(self.ui.color),
                    );
                }
            }
            PipelineEvent::StageCompleted { stage } => {
                if let Some(message) = completed_message(stage) {
                    self.line(Icon::Success, message.to_string());
                }
            }
            PipelineEvent::DeletingDirectory { label, path } => {
                self.line(
                    Icon::Trash,
                    format!("Deleting {} directory {}...", label, path.display()),
                );
            }
            PipelineEvent::DirectoryCleaned { label, .. } => {
                if self.ui.verbose > 0 {
                    self.detail(format!("{} directory removed", label));
                }
            }
            PipelineEvent::ExecutableLocated { path } => {
                if self.ui.verbose > 0 {
                    self.detail(format!("executable: {}", path.display()));
                }
            }
            PipelineEvent::ResourcesCopied { files, .. } => {
                self.detail(format!("copied {} resource files", files));
            }
            PipelineEvent::ResourcesMissing { path } => {
                let message = format!("Warning: '{}' directory not found!", path.display());
                self.line(
                    Icon::Warning,
                    ColoredText::warning(message).render(self.ui.color),
                );
            }
            PipelineEvent::StaleArchiveRemoved { path } => {
                self.detail(format!("replaced previous {}", path.display()));
            }
            // The final summary and the error handler cover these
            PipelineEvent::ArchiveCreated { .. } | PipelineEvent::Failed { .. } => {}
        }
    }
}
