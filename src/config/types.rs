//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Project identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Executable stem and archive stem (`pong` -> `pong.exe`, `pong_linux.tar.gz`)
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "pong".to_string(),
        }
    }
}

/// External build system invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub program: String,
    pub build_type: String,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    /// Extra arguments appended to the configure step
    pub configure_args: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: "cmake".to_string(),
            build_type: "Release".to_string(),
            source_dir: PathBuf::from("."),
            build_dir: PathBuf::from("build"),
            configure_args: Vec::new(),
        }
    }
}

/// Staging and archive layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    pub deploy_dir: PathBuf,
    pub resources_dir: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            deploy_dir: PathBuf::from("deploy"),
            resources_dir: PathBuf::from("resources"),
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Whether to wait for Enter before exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// Platform default (Windows pauses, others don't)
    #[default]
    Auto,
    Always,
    Never,
}

impl PauseMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(PauseMode::Auto),
            "always" | "true" | "1" => Some(PauseMode::Always),
            "never" | "false" | "0" => Some(PauseMode::Never),
            _ => None,
        }
    }

    pub fn resolve(self, platform_default: bool) -> bool {
        match self {
            PauseMode::Auto => platform_default,
            PauseMode::Always => true,
            PauseMode::Never => false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorMode,
    pub pause: PauseMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub build: BuildConfig,
    pub package: PackageConfig,
    pub output: OutputConfig,
}
