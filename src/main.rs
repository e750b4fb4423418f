//! Pongpack CLI - build, stage and archive the Pong game
//!
//! Usage: pongpack [OPTIONS]
//!
//! Runs the whole pipeline: clean, configure, build, stage, archive.
//! Exits 0 on success and 1 on the first failure.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pongpack::presentation::Cli;
use pongpack::Platform;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let platform = Platform::host();

    let (result, pause) = match commands::package::resolve_run(&cli) {
        Ok(run) => {
            let pause = run.loaded.config.output.pause;
            (
                commands::package::cmd_package(&cli, &platform, &run),
                pause,
            )
        }
        Err(err) => (Err(err), commands::package::fallback_pause()),
    };

    let failed = match result {
        Ok(()) => false,
        Err(err) => {
            tracing::debug!(error = ?err, "packaging failed");
            ui::error::print_error(&err, cli.json);
            true
        }
    };

    if ui::pause::should_pause(cli.no_pause, pause, &platform, ui::terminal::stdin_is_tty()) {
        ui::pause::wait_for_enter();
    }

    if failed {
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
