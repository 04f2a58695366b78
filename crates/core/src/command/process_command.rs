use std::process::{Command, ExitStatus, Output, Stdio};

use crate::error::{Error, Result};

/// A child process invocation: compiler, interpreter or compiled program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ProcessCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program);
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run to completion with the given stdin/stdout; stderr is inherited
    pub fn status_with_stdio(&self, stdin: Stdio, stdout: Stdio) -> Result<ExitStatus> {
        tracing::info!("Running: {}", self.to_shell_command());
        let status = self
            .build()
            .stdin(stdin)
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| self.spawn_error(source))?;
        tracing::debug!("'{}' exited with {}", self.program, status);
        Ok(status)
    }

    /// Run to completion, capturing stdout and stderr
    pub fn output(&self) -> Result<Output> {
        tracing::info!("Running: {}", self.to_shell_command());
        let output = self
            .build()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| self.spawn_error(source))?;
        tracing::debug!("'{}' exited with {}", self.program, output.status);
        Ok(output)
    }

    fn spawn_error(&self, source: std::io::Error) -> Error {
        Error::Spawn {
            command: self.to_shell_command(),
            source,
        }
    }
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
