//! Domain layer
//!
//! Platform descriptor, directory layout, pipeline stages, ports, and pure services.
//! Nothing here touches the disk or spawns processes directly.

pub mod layout;
pub mod platform;
pub mod ports;
pub mod services;
pub mod stage;
pub mod workspace;

pub use layout::{DirLayout, LayoutError};
pub use platform::{ArchiveFormat, Os, Platform};
pub use stage::PipelineStage;
pub use workspace::Workspace;
