//! Build Tool Implementations

mod cmake;

pub use cmake::{CMakeTool, ToolOutput};
