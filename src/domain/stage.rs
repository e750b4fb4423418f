//! Pipeline stage state machine
//!
//! The pipeline is strictly linear. Every non-terminal stage may move to its
//! single forward successor or to `Failed`; nothing moves backwards.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Start,
    CleanDeploy,
    CleanBuild,
    Configure,
    Build,
    MakeDeployDir,
    Stage,
    Archive,
    Done,
    Failed,
}

impl PipelineStage {
    /// Stages in execution order, excluding `Failed`
    pub const ORDER: [PipelineStage; 9] = [
        PipelineStage::Start,
        PipelineStage::CleanDeploy,
        PipelineStage::CleanBuild,
        PipelineStage::Configure,
        PipelineStage::Build,
        PipelineStage::MakeDeployDir,
        PipelineStage::Stage,
        PipelineStage::Archive,
        PipelineStage::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Start => "start",
            PipelineStage::CleanDeploy => "clean_deploy",
            PipelineStage::CleanBuild => "clean_build",
            PipelineStage::Configure => "configure",
            PipelineStage::Build => "build",
            PipelineStage::MakeDeployDir => "make_deploy_dir",
            PipelineStage::Stage => "stage",
            PipelineStage::Archive => "archive",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }

    /// Forward successor, `None` for terminal stages
    pub fn next(&self) -> Option<PipelineStage> {
        let idx = Self::ORDER.iter().position(|s| s == self)?;
        Self::ORDER.get(idx + 1).copied()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }

    pub fn can_transition_to(&self, next: PipelineStage) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == PipelineStage::Failed || self.next() == Some(next)
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
