use judge_runner_core::{ProgressSink, Stage};

/// Prints each stage on its own line on stdout
#[derive(Debug, Default)]
pub struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn stage(&mut self, stage: Stage) {
        println!("{stage}");
    }
}
