//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::layout::DirLayout;
use crate::error::{PongpackError, PongpackResult};

use super::types::{Config, PauseMode};

/// Project config file name, looked up in the workspace root
pub const PROJECT_CONFIG_FILE: &str = "pongpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Resolved configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PongpackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PongpackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a workspace.
///
/// Order: explicit file, `<root>/pongpack.toml`, user config, defaults.
/// Environment overrides (`PONGPACK_*`) are applied last. An explicit file
/// must exist; the implicit ones are skipped when absent. A layout that would
/// let cleaning delete project files is rejected here, before any step runs.
pub fn resolve(root: &Path, explicit: Option<&Path>) -> PongpackResult<LoadedConfig> {
    resolve_with(root, explicit, user_config_path(), |k| std::env::var(k).ok())
}

pub(crate) fn resolve_with(
    root: &Path,
    explicit: Option<&Path>,
    user_config: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> PongpackResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(root.join(path)),
        None => [Some(root.join(PROJECT_CONFIG_FILE)), user_config]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let mut loaded = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    loaded.config = with_env_overrides(loaded.config, get_env);
    check_layout(root, &loaded)?;
    Ok(loaded)
}

/// Apply environment variable overrides (PONGPACK_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(program) = get_env("PONGPACK_BUILD_PROGRAM").filter(|s| !s.is_empty()) {
        config.build.program = program;
    }

    if let Some(build_type) = get_env("PONGPACK_BUILD_TYPE").filter(|s| !s.is_empty()) {
        config.build.build_type = build_type;
    }

    if let Some(pause) = get_env("PONGPACK_PAUSE").and_then(|s| PauseMode::parse(&s)) {
        config.output.pause = pause;
    }

    config
}

fn check_layout(root: &Path, loaded: &LoadedConfig) -> PongpackResult<()> {
    let config = &loaded.config;
    let layout = DirLayout {
        source_dir: &config.build.source_dir,
        build_dir: &config.build.build_dir,
        deploy_dir: &config.package.deploy_dir,
        resources_dir: &config.package.resources_dir,
    };
    layout
        .check(root)
        .map_err(|e| PongpackError::InvalidConfig {
            file: loaded
                .source
                .clone()
                .unwrap_or_else(|| root.join(PROJECT_CONFIG_FILE)),
            message: e.to_string(),
        })
}

/// `<config_dir>/pongpack/config.toml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pongpack").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "name",
        "build",
        "program",
        "build_type",
        "source_dir",
        "build_dir",
        "configure_args",
        "package",
        "deploy_dir",
        "resources_dir",
        "output",
        "color",
        "pause",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
