//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands; a bare `pongpack` runs the whole pipeline
//! - Flags only adjust where the pipeline runs and how it reports

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Pongpack - build, stage and archive the Pong game for distribution
#[derive(Parser, Debug)]
#[command(name = "pongpack")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Cleans deploy/ and build/, runs the CMake configure and build steps, \
stages bin/ and resources/ into deploy/, then writes pong_windows.zip or pong_linux.tar.gz."
)]
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Configuration file, relative to the project directory (defaults to pongpack.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Do not wait for Enter before exiting
    #[arg(long)]
    pub no_pause: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// `tracing` filter directive for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
