//! Package Use Case
//!
//! Orchestrates the packaging flow:
//! 1. Clean the previous deploy and build directories
//! 2. Configure and build with the external build tool
//! 3. Stage the executable and resources into the deploy directory
//! 4. Compress the deploy directory into the platform archive
//!
//! The first failing step ends the run. Nothing is retried or rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::platform::Platform;
use crate::domain::ports::{
    Archiver, BuildRequest, BuildTool, ConfigureRequest, FileSystem, PipelineEvent,
    PipelineEventSink,
};
use crate::domain::services::locate_executable;
use crate::domain::stage::PipelineStage;
use crate::error::{PongpackError, PongpackResult};

use super::options::PackageOptions;
use super::result::{ArchiveInfo, PackageReport, StagedFiles};

/// Package use case - drives clean, configure, build, stage, archive
pub struct PackageUseCase<FS, BT>
where
    FS: FileSystem,
    BT: BuildTool,
{
    file_system: FS,
    build_tool: BT,
    archiver: Box<dyn Archiver>,
    platform: Platform,
}

impl<FS, BT> PackageUseCase<FS, BT>
where
    FS: FileSystem,
    BT: BuildTool,
{
    pub fn new(
        file_system: FS,
        build_tool: BT,
        archiver: Box<dyn Archiver>,
        platform: Platform,
    ) -> Self {
        debug_assert_eq!(archiver.format(), platform.archive_format);
        Self {
            file_system,
            build_tool,
            archiver,
            platform,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn build_tool(&self) -> &BT {
        &self.build_tool
    }

    /// Run the whole pipeline
    ///
    /// Fails with [`PongpackError::Layout`] before touching the disk when the
    /// build or deploy directory could cover project files.
    pub fn execute(
        &self,
        options: &PackageOptions,
        events: &dyn PipelineEventSink,
    ) -> PongpackResult<PackageReport> {
        options.layout().check(options.workspace.root())?;

        let deploy_dir = options.deploy_path();
        let build_dir = options.build_path();
        let mut run = StageTracker::new(events);

        run.step(PipelineStage::CleanDeploy, || {
            self.clean(&deploy_dir, "deploy", events)
        })?;
        run.step(PipelineStage::CleanBuild, || {
            self.clean(&build_dir, "build", events)
        })?;
        run.step(PipelineStage::Configure, || self.configure(options))?;
        run.step(PipelineStage::Build, || self.build(options))?;
        run.step(PipelineStage::MakeDeployDir, || {
            self.file_system
                .create_dir_all(&deploy_dir)
                .map_err(PongpackError::from)
        })?;
        let staged = run.step(PipelineStage::Stage, || self.stage(options, events))?;
        let archive = run.step(PipelineStage::Archive, || {
            self.archive(&deploy_dir, options, events)
        })?;

        Ok(PackageReport {
            staged,
            archive,
            stages: run.finish(),
        })
    }

    /// Recursively delete `path` if present.
    ///
    /// Returns whether anything was deleted. An absent path is not an error,
    /// so cleaning twice in a row always succeeds.
    pub fn clean(
        &self,
        path: &Path,
        label: &str,
        events: &dyn PipelineEventSink,
    ) -> PongpackResult<bool> {
        if !self.file_system.exists(path) {
            debug!(label, path = %path.display(), "nothing to clean");
            return Ok(false);
        }

        info!(label, path = %path.display(), "deleting directory");
        events.on_event(PipelineEvent::DeletingDirectory {
            label: label.to_string(),
            path: path.to_path_buf(),
        });
        self.file_system
            .remove_dir_all(path)
            .map_err(|source| PongpackError::Clean {
                label: label.to_string(),
                path: path.to_path_buf(),
                source,
            })?;

        events.on_event(PipelineEvent::DirectoryCleaned {
            label: label.to_string(),
            path: path.to_path_buf(),
        });
        Ok(true)
    }

    pub fn configure(&self, options: &PackageOptions) -> PongpackResult<()> {
        self.build_tool.configure(&ConfigureRequest {
            working_dir: options.workspace.root().to_path_buf(),
            build_type: options.build_type.clone(),
            source_dir: options.source_dir.clone(),
            build_dir: options.build_dir.clone(),
            extra_args: options.configure_args.clone(),
        })
    }

    pub fn build(&self, options: &PackageOptions) -> PongpackResult<()> {
        self.build_tool.build(&BuildRequest {
            working_dir: options.workspace.root().to_path_buf(),
            build_dir: options.build_dir.clone(),
            config: options.build_type.clone(),
        })
    }

    /// Expected executable path inside `build_dir` (may not exist)
    pub fn locate_executable(&self, build_dir: &Path, project_name: &str) -> PathBuf {
        locate_executable(&self.file_system, &self.platform, build_dir, project_name)
    }

    /// Copy the executable into `deploy/bin/` and merge `resources/` into
    /// `deploy/resources/`. A missing resources tree is only a warning.
    pub fn stage(
        &self,
        options: &PackageOptions,
        events: &dyn PipelineEventSink,
    ) -> PongpackResult<StagedFiles> {
        let deploy_dir = options.deploy_path();
        let executable_source = self.locate_executable(&options.build_path(), &options.project_name);

        if !self.file_system.exists(&executable_source) {
            return Err(PongpackError::ExecutableNotFound {
                path: executable_source,
            });
        }
        events.on_event(PipelineEvent::ExecutableLocated {
            path: executable_source.clone(),
        });

        let bin_dir = deploy_dir.join("bin");
        self.file_system.create_dir_all(&bin_dir)?;

        let executable = bin_dir.join(self.platform.executable_name(&options.project_name));
        self.file_system
            .copy_file(&executable_source, &executable)
            .map_err(|source| PongpackError::Copy {
                from: executable_source.clone(),
                to: executable.clone(),
                source,
            })?;

        let resources_source = options.resources_path();
        let resources = if self.file_system.is_dir(&resources_source) {
            let target = deploy_dir.join("resources");
            let files = self
                .file_system
                .copy_dir_merge(&resources_source, &target)
                .map_err(|source| PongpackError::Copy {
                    from: resources_source.clone(),
                    to: target.clone(),
                    source,
                })?;
            events.on_event(PipelineEvent::ResourcesCopied {
                from: resources_source,
                files,
            });
            Some(files)
        } else {
            debug!(path = %resources_source.display(), "resources directory not found");
            events.on_event(PipelineEvent::ResourcesMissing {
                path: resources_source,
            });
            None
        };

        Ok(StagedFiles {
            executable_source,
            executable,
            resources,
        })
    }

    /// Replace `<name>_<platform>.<ext>` in the workspace root with a fresh
    /// archive of `deploy_dir`.
    pub fn archive(
        &self,
        deploy_dir: &Path,
        options: &PackageOptions,
        events: &dyn PipelineEventSink,
    ) -> PongpackResult<ArchiveInfo> {
        let path = options
            .workspace
            .path(self.platform.archive_file_name(&options.project_name));

        if self.file_system.exists(&path) {
            self.file_system.remove_file(&path)?;
            events.on_event(PipelineEvent::StaleArchiveRemoved { path: path.clone() });
        }

        info!(path = %path.display(), format = %self.archiver.format(), "creating archive");
        let summary = self.archiver.create(deploy_dir, &path)?;
        let digest = self.file_system.hash(&path)?;

        events.on_event(PipelineEvent::ArchiveCreated {
            path: path.clone(),
            format: self.archiver.format(),
            files: summary.files,
            bytes: summary.bytes,
        });

        Ok(ArchiveInfo {
            path,
            format: self.archiver.format(),
            files: summary.files,
            bytes: summary.bytes,
            digest,
        })
    }
}

/// Walks the linear stage machine and reports each transition
struct StageTracker<'a> {
    current: PipelineStage,
    completed: Vec<PipelineStage>,
    events: &'a dyn PipelineEventSink,
}

impl<'a> StageTracker<'a> {
    fn new(events: &'a dyn PipelineEventSink) -> Self {
        Self {
            current: PipelineStage::Start,
            completed: Vec::new(),
            events,
        }
    }

    fn step<T>(
        &mut self,
        stage: PipelineStage,
        f: impl FnOnce() -> PongpackResult<T>,
    ) -> PongpackResult<T> {
        debug_assert!(
            self.current.can_transition_to(stage),
            "invalid stage transition {} -> {}",
            self.current,
            stage
        );
        debug!(from = %self.current, to = %stage, "stage transition");
        self.current = stage;
        self.events.on_event(PipelineEvent::StageStarted { stage });

        match f() {
            Ok(value) => {
                self.completed.push(stage);
                self.events.on_event(PipelineEvent::StageCompleted { stage });
                Ok(value)
            }
            Err(err) => {
                self.current = PipelineStage::Failed;
                self.events.on_event(PipelineEvent::Failed {
                    stage,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn finish(mut self) -> Vec<PipelineStage> {
        debug_assert!(self.current.can_transition_to(PipelineStage::Done));
        self.current = PipelineStage::Done;
        self.completed
    }
}
