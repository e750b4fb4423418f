//! Common test utilities for pongpack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus a fake CMake
//! - Assertion macros: `assert_exists!`, `assert_output_contains!`
//! - Fixtures: the fake CMake script and sample config files

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
