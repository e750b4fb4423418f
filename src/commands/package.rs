//! Package command handler
//!
//! Resolves the workspace and configuration, runs the packaging pipeline and
//! renders its outcome.

use std::path::PathBuf;

use anyhow::{Context, Result};

use pongpack::application::PackageOptions;
use pongpack::config::{self, LoadedConfig};
use pongpack::domain::ports::PipelineEventSink;
use pongpack::infrastructure::JsonEventSink;
use pongpack::presentation::{factory, Cli};
use pongpack::{Platform, Workspace};

use crate::ui::context::UiContext;
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::package::{
    package_result_json, render_config_warning, render_package_header, render_package_result,
};

/// Workspace and configuration for one run
#[derive(Debug)]
pub struct PackageRun {
    pub workspace: Workspace,
    pub loaded: LoadedConfig,
}

/// Resolve the project directory and load its configuration
pub fn resolve_run(cli: &Cli) -> Result<PackageRun> {
    let workdir = cli.workdir.clone().unwrap_or_else(|| PathBuf::from("."));
    let root = std::path::absolute(&workdir)
        .with_context(|| format!("cannot resolve project directory {}", workdir.display()))?;
    if !root.is_dir() {
        anyhow::bail!("project directory {} does not exist", root.display());
    }

    let loaded = config::resolve(&root, cli.config.as_deref())?;
    Ok(PackageRun {
        workspace: Workspace::new(root),
        loaded,
    })
}

/// Execute the packaging pipeline
pub fn cmd_package(cli: &Cli, platform: &Platform, run: &PackageRun) -> Result<()> {
    let config = &run.loaded.config;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, config);

    if !cli.json {
        print!(
            "{}",
            render_package_header(
                run.workspace.root(),
                platform,
                run.loaded.source.as_deref(),
                ui.color,
                ui.unicode
            )
        );
        for warning in &run.loaded.warnings {
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
    }

    let options = PackageOptions::from_config(run.workspace.clone(), config);
    let use_case = factory::create_package_use_case_for(platform.clone(), config, cli.json);

    let sink: Box<dyn PipelineEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    };

    let report = use_case.execute(&options, sink.as_ref())?;

    if cli.json {
        crate::ui::json::emit(package_result_json(&report))?;
    } else {
        println!();
        print!("{}", render_package_result(&report, ui.color, ui.unicode));
    }

    Ok(())
}

/// Pause mode when configuration could not be loaded: defaults plus env
pub fn fallback_pause() -> config::PauseMode {
    config::with_env_overrides(config::Config::default(), |k| std::env::var(k).ok())
        .output
        .pause
}
