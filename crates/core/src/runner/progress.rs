use std::fmt;

/// Pipeline steps that are announced as they start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Compiling,
    Executing,
    Comparing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Stage::Compiling => "Compiling...",
            Stage::Executing => "Executing...",
            Stage::Comparing => "Comparing outputs...",
        };
        f.write_str(message)
    }
}

pub trait ProgressSink {
    fn stage(&mut self, stage: Stage);
}

/// Records stages in order
impl ProgressSink for Vec<Stage> {
    fn stage(&mut self, stage: Stage) {
        self.push(stage);
    }
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressSink for Silent {
    fn stage(&mut self, _stage: Stage) {}
}
