//! Domain services - pure logic over ports

pub mod locator;

pub use locator::locate_executable;
