//! Terminal UI for the pongpack binary
//!
//! Capability detection, design tokens, progress output and error rendering.

pub mod context;
pub mod error;
pub mod json;
pub mod pause;
pub mod primitives;
pub mod sink;
pub mod terminal;
pub mod theme;
pub mod views;
