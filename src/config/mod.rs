//! Configuration module for Pongpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PONGPACK_*)
//! 3. Project config (pongpack.toml in the workspace root)
//! 4. User config (<config_dir>/pongpack/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    BuildConfig, ColorMode, Config, OutputConfig, PackageConfig, PauseMode, ProjectConfig,
};
