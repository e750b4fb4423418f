//! End-to-end packaging runs against the fake CMake.

#![cfg(unix)]

mod common;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use common::*;

fn tar_entries(archive: &Path) -> BTreeSet<String> {
    let file = fs::File::open(archive).unwrap();
    let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(file));
    tar.entries()
        .unwrap()
        .map(|e| {
            e.unwrap()
                .path()
                .unwrap()
                .to_string_lossy()
                .trim_end_matches('/')
                .to_string()
        })
        .collect()
}

fn with_resources(env: &TestEnv) {
    env.write_project_file("resources/fonts/arcade.ttf", "font");
    env.write_project_file("resources/sounds/paddle.wav", "wav");
}

#[test]
fn package_creates_linux_tarball() {
    let env = TestEnv::new();
    with_resources(&env);

    let result = env.run(&["--no-pause"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.exit_code, 0);
    assert_exists!(env, "deploy/bin/pong");
    assert_exists!(env, "deploy/resources/fonts/arcade.ttf");
    assert_exists!(env, "pong_linux.tar.gz");

    let entries = tar_entries(&env.project_path("pong_linux.tar.gz"));
    assert!(entries.contains("deploy/bin/pong"), "{entries:?}");
    assert!(entries.contains("deploy/resources/sounds/paddle.wav"));
    assert!(entries.iter().all(|e| e == "deploy" || e.starts_with("deploy/")));

    assert_output_contains!(result, "Deployment archive created:");
    assert_output_contains!(
        result,
        &env.project_path("pong_linux.tar.gz").display().to_string()
    );
    // Build tool output is passed through
    assert_output_contains!(result, "-- Configuring done");
}

#[test]
fn staged_executable_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();

    let result = env.run(&["--no-pause"]);

    assert!(result.success, "{}", result.combined_output());
    let mode = fs::metadata(env.project_path("deploy/bin/pong"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn cmake_is_invoked_with_release_arguments() {
    let env = TestEnv::new();
    let log = env.home_dir.path().join("cmake.log");

    let result = env.run_with_env(&["--no-pause"], &[("FAKE_CMAKE_LOG", log.to_str().unwrap())]);

    assert!(result.success, "{}", result.combined_output());
    let calls = fs::read_to_string(&log).unwrap();
    let calls: Vec<&str> = calls.lines().collect();
    assert_eq!(
        calls,
        vec![
            "-DCMAKE_BUILD_TYPE=Release -S . -B build",
            "--build build --config Release",
        ]
    );
}

#[test]
fn build_type_env_override_reaches_cmake() {
    let env = TestEnv::new();
    let log = env.home_dir.path().join("cmake.log");

    let result = env.run_with_env(
        &["--no-pause"],
        &[
            ("FAKE_CMAKE_LOG", log.to_str().unwrap()),
            ("PONGPACK_BUILD_TYPE", "Debug"),
        ],
    );

    assert!(result.success, "{}", result.combined_output());
    let calls = fs::read_to_string(&log).unwrap();
    assert!(calls.contains("-DCMAKE_BUILD_TYPE=Debug"));
    assert!(calls.contains("--config Debug"));
}

#[test]
fn previous_outputs_are_replaced() {
    let env = TestEnv::new();
    env.write_project_file("deploy/old-build.txt", "stale");
    env.write_project_file("build/CMakeCache.txt", "stale");
    env.write_project_file("pong_linux.tar.gz", "not an archive");

    let result = env.run(&["--no-pause"]);

    assert!(result.success, "{}", result.combined_output());
    assert_not_exists!(env, "deploy/old-build.txt");
    assert_not_exists!(env, "build/CMakeCache.txt");
    assert_output_contains!(result, "Deleting deploy directory");
    assert_output_contains!(result, "Deleting build directory");

    let entries = tar_entries(&env.project_path("pong_linux.tar.gz"));
    assert!(!entries.iter().any(|e| e.contains("old-build")));
}

#[test]
fn missing_resources_is_a_warning() {
    let env = TestEnv::new();

    let result = env.run(&["--no-pause"]);

    assert!(result.success, "{}", result.combined_output());
    let expected = format!(
        "Warning: '{}' directory not found!",
        env.project_path("resources").display()
    );
    assert_output_contains!(result, &expected);
    assert_not_exists!(env, "deploy/resources");
    assert_exists!(env, "pong_linux.tar.gz");
}

#[test]
fn json_mode_emits_only_events_on_stdout() {
    let env = TestEnv::new();
    with_resources(&env);

    let result = env.run(&["--json", "--no-pause"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["format"], "tar.gz");
    assert!(last["digest"].as_str().unwrap().starts_with("sha256:"));
    assert!(events
        .iter()
        .any(|e| e["event"] == "stage_complete" && e["stage"] == "build"));
    // CMake chatter is moved to stderr
    assert!(result.stderr.contains("-- Configuring done"));
}

#[test]
fn workdir_flag_runs_elsewhere() {
    let env = TestEnv::new();
    let project = env.project_root.path().to_str().unwrap().to_string();

    let result = env.run_from_with_env(
        env.home_dir.path(),
        &["--workdir", &project, "--no-pause"],
        &[],
    );

    assert!(result.success, "{}", result.combined_output());
    assert_exists!(env, "pong_linux.tar.gz");
    assert!(!env.home_dir.path().join("pong_linux.tar.gz").exists());
}

#[test]
fn project_config_renames_outputs() {
    let env = TestEnv::new();
    env.write_project_file("pongpack.toml", BREAKOUT_CONFIG);

    let result = env.run_with_env(&["--no-pause"], &[("FAKE_CMAKE_TARGET", "breakout")]);

    assert!(result.success, "{}", result.combined_output());
    assert_exists!(env, "deploy/bin/breakout");
    assert_exists!(env, "breakout_linux.tar.gz");
    assert_output_contains!(result, "pongpack.toml");
}

#[test]
fn unknown_config_key_is_reported() {
    let env = TestEnv::new();
    env.write_project_file("pongpack.toml", TYPO_CONFIG);

    let result = env.run(&["--no-pause"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("unknown configuration key 'progam'"));
    assert!(result.stderr.contains("did you mean 'program'?"));
}
