//! Command handlers for the pongpack binary

pub mod package;
