//! Package options

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{DirLayout, Workspace};

/// Everything the packaging pipeline needs to know about a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    pub workspace: Workspace,
    /// Executable stem and archive stem
    pub project_name: String,
    pub build_type: String,
    /// Relative to the workspace root
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub deploy_dir: PathBuf,
    pub resources_dir: PathBuf,
    pub configure_args: Vec<String>,
}

impl PackageOptions {
    /// Defaults: `pong`, Release, `.` -> `build/`, staged into `deploy/`
    pub fn new(workspace: Workspace) -> Self {
        Self::from_config(workspace, &Config::default())
    }

    pub fn from_config(workspace: Workspace, config: &Config) -> Self {
        Self {
            workspace,
            project_name: config.project.name.clone(),
            build_type: config.build.build_type.clone(),
            source_dir: config.build.source_dir.clone(),
            build_dir: config.build.build_dir.clone(),
            deploy_dir: config.package.deploy_dir.clone(),
            resources_dir: config.package.resources_dir.clone(),
            configure_args: config.build.configure_args.clone(),
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn layout(&self) -> DirLayout<'_> {
        DirLayout {
            source_dir: &self.source_dir,
            build_dir: &self.build_dir,
            deploy_dir: &self.deploy_dir,
            resources_dir: &self.resources_dir,
        }
    }

    pub fn build_path(&self) -> PathBuf {
        self.workspace.path(&self.build_dir)
    }

    pub fn deploy_path(&self) -> PathBuf {
        self.workspace.path(&self.deploy_dir)
    }

    pub fn resources_path(&self) -> PathBuf {
        self.workspace.path(&self.resources_dir)
    }
}
