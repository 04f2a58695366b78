use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The four paths a single harness run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source_file: PathBuf,
    pub input_file: PathBuf,
    /// Created or truncated by the execute step
    pub output_file: PathBuf,
    pub expected_output_file: PathBuf,
}

impl Invocation {
    pub fn new(
        source_file: impl Into<PathBuf>,
        input_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        expected_output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            input_file: input_file.into(),
            output_file: output_file.into(),
            expected_output_file: expected_output_file.into(),
        }
    }

    /// Paths that must exist before any work begins, in argument order
    pub fn required_files(&self) -> [&Path; 3] {
        [
            &self.source_file,
            &self.input_file,
            &self.expected_output_file,
        ]
    }

    /// Fails with the first required path that is missing on disk
    pub fn validate(&self) -> Result<()> {
        for path in self.required_files() {
            if !path.exists() {
                tracing::debug!("Required file missing: {:?}", path);
                return Err(Error::MissingFile(path.to_path_buf()));
            }
        }
        Ok(())
    }
}
