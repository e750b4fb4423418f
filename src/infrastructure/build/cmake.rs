//! CMake Build Tool
//!
//! Runs `cmake` (or a configured drop-in) as a blocking child process for the
//! configure and build steps.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::ports::{BuildRequest, BuildTool, ConfigureRequest};
use crate::error::{BuildStep, PongpackError, PongpackResult};

/// Where the child's stdout goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolOutput {
    /// Share our stdout and stderr
    #[default]
    Inherit,
    /// Send stdout to our stderr (keeps stdout clean for JSON events)
    Stderr,
}

/// Build tool driven through the CMake command line
#[derive(Debug, Clone)]
pub struct CMakeTool {
    program: String,
    output: ToolOutput,
}

impl CMakeTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            output: ToolOutput::default(),
        }
    }

    pub fn with_output(mut self, output: ToolOutput) -> Self {
        self.output = output;
        self
    }

    /// `cmake -DCMAKE_BUILD_TYPE=Release -S . -B build`
    pub fn configure_command(&self, request: &ConfigureRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(format!("-DCMAKE_BUILD_TYPE={}", request.build_type))
            .arg("-S")
            .arg(&request.source_dir)
            .arg("-B")
            .arg(&request.build_dir)
            .args(&request.extra_args)
            .current_dir(&request.working_dir);
        cmd
    }

    /// `cmake --build build --config Release`
    pub fn build_command(&self, request: &BuildRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--build")
            .arg(&request.build_dir)
            .arg("--config")
            .arg(&request.config)
            .current_dir(&request.working_dir);
        cmd
    }

    fn run(&self, step: BuildStep, mut cmd: Command) -> PongpackResult<()> {
        match self.output {
            ToolOutput::Inherit => {
                cmd.stdout(Stdio::inherit());
            }
            ToolOutput::Stderr => {
                cmd.stdout(Stdio::from(std::io::stderr()));
            }
        }
        cmd.stdin(Stdio::null()).stderr(Stdio::inherit());

        info!(step = %step, command = %render_command(&cmd), "running build tool");

        let status = cmd.status().map_err(|source| PongpackError::ToolSpawn {
            step,
            program: self.program.clone(),
            source,
        })?;

        debug!(step = %step, status = ?status, "build tool exited");

        if !status.success() {
            return Err(PongpackError::ToolFailed {
                step,
                program: self.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl BuildTool for CMakeTool {
    fn name(&self) -> &str {
        &self.program
    }

    fn configure(&self, request: &ConfigureRequest) -> PongpackResult<()> {
        self.run(BuildStep::Configure, self.configure_command(request))
    }

    fn build(&self, request: &BuildRequest) -> PongpackResult<()> {
        self.run(BuildStep::Build, self.build_command(request))
    }
}

/// Printable command line for logs
fn render_command(cmd: &Command) -> String {
    let mut parts: Vec<OsString> = vec![cmd.get_program().to_os_string()];
    parts.extend(cmd.get_args().map(|a| a.to_os_string()));
    parts
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
