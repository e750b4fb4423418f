//! Event Sink Implementations
//!
//! Concrete implementations of PipelineEventSink that live in the library.
//! The human-readable console sink belongs to the binary's UI layer.

mod json;

pub use json::JsonEventSink;
