//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::PackageUseCase;
use crate::config::Config;
use crate::domain::Platform;
use crate::infrastructure::{archiver_for, CMakeTool, LocalFs, ToolOutput};

/// Type alias for the concrete PackageUseCase with all dependencies
pub type ConcretePackageUseCase = PackageUseCase<LocalFs, CMakeTool>;

/// Create a package use case for the host platform
///
/// Build tool output goes to stdout unless `json` is set, in which case it
/// is redirected to stderr so stdout carries only JSON events.
pub fn create_package_use_case(config: &Config, json: bool) -> ConcretePackageUseCase {
    create_package_use_case_for(Platform::host(), config, json)
}

/// Create a package use case for an explicit platform
pub fn create_package_use_case_for(
    platform: Platform,
    config: &Config,
    json: bool,
) -> ConcretePackageUseCase {
    let output = if json {
        ToolOutput::Stderr
    } else {
        ToolOutput::Inherit
    };
    let build_tool = CMakeTool::new(config.build.program.clone()).with_output(output);

    PackageUseCase::new(
        LocalFs::new(),
        build_tool,
        archiver_for(platform.archive_format),
        platform,
    )
}
