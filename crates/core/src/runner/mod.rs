//! The compile → execute → diff pipeline

pub mod guard;
pub mod progress;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::{debug, info};

use crate::{
    command::ProcessCommand,
    config::Config,
    diff::{DiffResult, UnifiedDiff, diff_files},
    error::{Error, Result},
    toolchain::Toolchain,
    types::Invocation,
};

pub use guard::{ArtifactGuard, cleanup};
pub use progress::{ProgressSink, Silent, Stage};

/// Outcome of a pipeline that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub toolchain: Toolchain,
    pub diff: DiffResult,
}

impl Report {
    pub fn is_match(&self) -> bool {
        self.diff.is_empty()
    }
}

/// Commands a run would spawn, without spawning them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub toolchain: Toolchain,
    pub compile: Option<ProcessCommand>,
    pub run: ProcessCommand,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

impl Plan {
    pub fn run_shell_command(&self) -> String {
        format!(
            "{} < {} > {}",
            self.run.to_shell_command(),
            self.input_file.display(),
            self.output_file.display()
        )
    }
}

pub struct Harness {
    config: Config,
    renderer: UnifiedDiff,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let renderer = UnifiedDiff::new().with_context(config.context_lines());
        Self { config, renderer }
    }

    /// Harness configured by the config file that applies to `source_file`
    pub fn for_source(source_file: &Path) -> Result<Self> {
        Ok(Self::with_config(Config::discover(source_file)?))
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.renderer = self.renderer.with_context(context);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn select_toolchain(&self, source_file: &Path) -> Result<Toolchain> {
        Toolchain::select(source_file, &self.config)
    }

    /// Build the source; a no-op for interpreted toolchains
    pub fn compile(&self, toolchain: &Toolchain, source_file: &Path) -> Result<()> {
        let Some(command) = toolchain.compile_command(source_file) else {
            debug!("{} toolchain has no compile step", toolchain.kind());
            return Ok(());
        };

        let output = command.output()?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(Error::Compile {
                command: command.to_shell_command(),
                status: output.status,
                output: text,
            });
        }
        if !text.trim().is_empty() {
            tracing::warn!("Compiler output for {:?}:\n{}", source_file, text.trim_end());
        }
        Ok(())
    }

    /// Run the program with stdin from `input_file` and stdout into
    /// `output_file`. Both files are closed when this returns.
    pub fn execute(
        &self,
        toolchain: &Toolchain,
        source_file: &Path,
        input_file: &Path,
        output_file: &Path,
    ) -> Result<()> {
        let input = File::open(input_file).map_err(|source| Error::File {
            path: input_file.to_path_buf(),
            source,
        })?;
        let output = File::create(output_file).map_err(|source| Error::File {
            path: output_file.to_path_buf(),
            source,
        })?;

        let command = toolchain.run_command(source_file);
        let status = command.status_with_stdio(Stdio::from(input), Stdio::from(output))?;

        if !status.success() {
            return Err(Error::Execution {
                command: command.to_shell_command(),
                status,
            });
        }
        Ok(())
    }

    /// Compare actual output (the "to" side) against expected (the "from" side)
    pub fn diff(&self, output_file: &Path, expected_output_file: &Path) -> Result<DiffResult> {
        diff_files(output_file, expected_output_file, &self.renderer)
    }

    pub fn plan(&self, invocation: &Invocation) -> Result<Plan> {
        let toolchain = self.select_toolchain(&invocation.source_file)?;
        Ok(Plan {
            compile: toolchain.compile_command(&invocation.source_file),
            run: toolchain.run_command(&invocation.source_file),
            toolchain,
            input_file: invocation.input_file.clone(),
            output_file: invocation.output_file.clone(),
        })
    }

    /// Run the whole pipeline.
    ///
    /// An unsupported source fails before anything is spawned. Once a
    /// toolchain is selected, its artifact is cleaned up on every path out of
    /// this function.
    pub fn run(&self, invocation: &Invocation, progress: &mut dyn ProgressSink) -> Result<Report> {
        let source_file = &invocation.source_file;
        let toolchain = self.select_toolchain(source_file)?;
        info!("Running {:?} with the {} toolchain", source_file, toolchain);

        let _guard = ArtifactGuard::new(&toolchain);

        if toolchain.has_compile_step() {
            progress.stage(Stage::Compiling);
            self.compile(&toolchain, source_file)?;
        }

        progress.stage(Stage::Executing);
        self.execute(
            &toolchain,
            source_file,
            &invocation.input_file,
            &invocation.output_file,
        )?;

        progress.stage(Stage::Comparing);
        let diff = self.diff(&invocation.output_file, &invocation.expected_output_file)?;

        Ok(Report {
            toolchain: toolchain.clone(),
            diff,
        })
    }
}
