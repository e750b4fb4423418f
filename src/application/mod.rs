//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (platform, stages, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PackageUseCase` - Orchestrates clean, configure, build, stage and archive

pub mod package;

pub use package::{ArchiveInfo, PackageOptions, PackageReport, PackageUseCase, StagedFiles};
