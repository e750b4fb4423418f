//! Test environment builder for isolated pongpack testing.
//!
//! Provides `TestEnv` - an isolated project directory and home directory,
//! a fake CMake on disk, and helpers to run the pongpack binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::FAKE_CMAKE;

/// Result of running the pongpack binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the game project
    pub project_root: TempDir,
    /// Temporary directory for HOME (user config and the fake CMake)
    pub home_dir: TempDir,
    /// Canonical project root, matching what the binary sees as its cwd
    root: PathBuf,
    fake_cmake: PathBuf,
    pongpack_bin: PathBuf,
}

impl TestEnv {
    /// Empty project with the fake CMake installed
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");
        let fake_cmake = home_dir.path().join("fake-cmake");
        write_executable(&fake_cmake, FAKE_CMAKE);
        let root = std::fs::canonicalize(project_root.path()).expect("Failed to resolve project dir");

        Self {
            project_root,
            root,
            home_dir,
            fake_cmake,
            pongpack_bin: PathBuf::from(env!("CARGO_BIN_EXE_pongpack")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn fake_cmake(&self) -> &Path {
        &self.fake_cmake
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run pongpack from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run pongpack from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.root, args, env_vars)
    }

    /// Run pongpack from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.pongpack_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("PONGPACK_BUILD_PROGRAM", &self.fake_cmake)
            .env("NO_COLOR", "1")
            .env_remove("PONGPACK_PAUSE")
            .env_remove("PONGPACK_BUILD_TYPE")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pongpack");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
fn write_executable(path: &Path, content: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, content).expect("Failed to write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark script executable");
}

#[cfg(not(unix))]
fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write script");
}
