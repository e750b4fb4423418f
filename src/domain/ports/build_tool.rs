//! BuildTool port - the external build system (configure + build)

use std::path::PathBuf;

use crate::error::PongpackResult;

/// Generate build files from the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureRequest {
    /// Directory the tool is run from
    pub working_dir: PathBuf,
    pub build_type: String,
    /// Source directory, relative to `working_dir`
    pub source_dir: PathBuf,
    /// Output directory, relative to `working_dir`
    pub build_dir: PathBuf,
    pub extra_args: Vec<String>,
}

/// Compile a previously configured project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub working_dir: PathBuf,
    pub build_dir: PathBuf,
    pub config: String,
}

/// External build system invoked through its command line.
///
/// Both calls block until the tool exits. A non-zero exit is an error.
pub trait BuildTool {
    /// Program name, for messages
    fn name(&self) -> &str;

    fn configure(&self, request: &ConfigureRequest) -> PongpackResult<()>;

    fn build(&self, request: &BuildRequest) -> PongpackResult<()>;
}
