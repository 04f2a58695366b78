//! Toolchain selection: how a source file is built and run

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    command::ProcessCommand,
    config::Config,
    error::{Error, Result},
    types::Language,
    utils::{detect_language, executable_path, file_stem, parent_dir},
};

/// Build and run commands for one source file, selected once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toolchain {
    /// Compiled to a native executable, which is removed after the run
    Native {
        compiler: String,
        flags: Vec<String>,
        executable: PathBuf,
    },
    /// Compiled to a class file next to the source and run by class name
    Bytecode {
        compiler: String,
        flags: Vec<String>,
        interpreter: String,
        class_name: String,
        class_dir: PathBuf,
    },
    /// Run directly, no compile step
    Interpreted {
        interpreter: String,
        flags: Vec<String>,
    },
}

impl Toolchain {
    /// Pick the toolchain for `source_file` by its extension
    pub fn select(source_file: &Path, config: &Config) -> Result<Self> {
        let language = detect_language(source_file).ok_or_else(|| Error::UnsupportedLanguage {
            path: source_file.to_path_buf(),
        })?;

        let toolchain = match language {
            Language::Cpp => {
                let native = config.native();
                let executable = match native.executable {
                    Some(ref executable) => executable.clone(),
                    None => default_executable(source_file)?,
                };
                Toolchain::Native {
                    compiler: native.compiler().to_string(),
                    flags: native.flags().to_vec(),
                    executable,
                }
            }
            Language::Java => {
                let bytecode = config.bytecode();
                let class_name = file_stem(source_file).ok_or_else(|| {
                    Error::Other(format!(
                        "Cannot derive a class name from {}",
                        source_file.display()
                    ))
                })?;
                Toolchain::Bytecode {
                    compiler: bytecode.compiler().to_string(),
                    flags: bytecode.flags().to_vec(),
                    interpreter: bytecode.interpreter().to_string(),
                    class_name,
                    class_dir: parent_dir(source_file).to_path_buf(),
                }
            }
            Language::Python => {
                let interpreted = config.interpreted();
                Toolchain::Interpreted {
                    interpreter: interpreted.interpreter().to_string(),
                    flags: interpreted.flags().to_vec(),
                }
            }
        };

        tracing::debug!("Selected {} toolchain for {:?}", toolchain.kind(), source_file);
        Ok(toolchain)
    }

    pub fn language(&self) -> Language {
        match self {
            Toolchain::Native { .. } => Language::Cpp,
            Toolchain::Bytecode { .. } => Language::Java,
            Toolchain::Interpreted { .. } => Language::Python,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Toolchain::Native { .. } => "native",
            Toolchain::Bytecode { .. } => "bytecode",
            Toolchain::Interpreted { .. } => "interpreted",
        }
    }

    pub fn has_compile_step(&self) -> bool {
        !matches!(self, Toolchain::Interpreted { .. })
    }

    /// `None` for interpreted toolchains
    pub fn compile_command(&self, source_file: &Path) -> Option<ProcessCommand> {
        let source = source_file.to_string_lossy();
        match self {
            Toolchain::Native {
                compiler,
                flags,
                executable,
            } => Some(
                ProcessCommand::new(compiler.as_str())
                    .args(flags.iter().cloned())
                    .arg("-o")
                    .arg(executable.to_string_lossy())
                    .arg(source),
            ),
            Toolchain::Bytecode {
                compiler, flags, ..
            } => Some(
                ProcessCommand::new(compiler.as_str())
                    .args(flags.iter().cloned())
                    .arg(source),
            ),
            Toolchain::Interpreted { .. } => None,
        }
    }

    pub fn run_command(&self, source_file: &Path) -> ProcessCommand {
        match self {
            Toolchain::Native { executable, .. } => {
                ProcessCommand::new(executable_path(executable))
            }
            Toolchain::Bytecode {
                interpreter,
                class_name,
                class_dir,
                ..
            } => ProcessCommand::new(interpreter.as_str())
                .arg("-cp")
                .arg(class_dir.to_string_lossy())
                .arg(class_name.as_str()),
            Toolchain::Interpreted { interpreter, flags } => {
                ProcessCommand::new(interpreter.as_str())
                    .args(flags.iter().cloned())
                    .arg(source_file.to_string_lossy())
            }
        }
    }

    /// Build output that must be removed once the run is over
    pub fn artifact(&self) -> Option<&Path> {
        match self {
            Toolchain::Native { executable, .. } => Some(executable.as_path()),
            // class files are left in place
            Toolchain::Bytecode { .. } | Toolchain::Interpreted { .. } => None,
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.language(), self.kind())
    }
}

fn default_executable(source_file: &Path) -> Result<PathBuf> {
    let stem = file_stem(source_file).ok_or_else(|| {
        Error::Other(format!(
            "Cannot derive an executable name from {}",
            source_file.display()
        ))
    })?;
    Ok(parent_dir(source_file).join(format!("{stem}.out")))
}
