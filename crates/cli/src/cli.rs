use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::run_command;

pub const USAGE: &str =
    "Usage: runner <source_file> <input_file> <output_file> <expected_output_file>";

#[derive(Parser, Debug)]
#[command(name = "runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    /// Solution source file (.cc, .cpp, .java or .py)
    pub source_file: PathBuf,

    /// File fed to the program on stdin
    pub input_file: PathBuf,

    /// File the program's stdout is written to (created or overwritten)
    pub output_file: PathBuf,

    /// File holding the expected output
    pub expected_output_file: PathBuf,

    /// Use this config file instead of searching for .judge-runner.json
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lines of context around each diff hunk
    #[arg(short = 'U', long)]
    pub context: Option<usize>,

    /// Print the commands without executing them
    #[arg(short, long)]
    pub dry_run: bool,
}

impl Runner {
    /// Execute the command
    pub fn execute(self) -> Result<ExitCode> {
        run_command(&self)
    }
}

/// Parse arguments; on failure returns the exit status to use (1 for usage errors)
pub fn parse_args<I, T>(args: I) -> std::result::Result<Runner, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Runner::try_parse_from(args) {
        Ok(runner) => Ok(runner),
        Err(err) => {
            use clap::error::ErrorKind;
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    Err(0)
                }
                kind => {
                    tracing::debug!("Argument error: {}", err);
                    eprintln!("error: {}", kind.as_str().unwrap_or("invalid arguments"));
                    println!("{USAGE}");
                    Err(1)
                }
            }
        }
    }
}
