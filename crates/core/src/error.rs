use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors that can occur while running a program through the harness
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported language. Only C++, Java, and Python are supported. (got {})", .path.display())]
    UnsupportedLanguage { path: PathBuf },

    #[error("Command '{command}' returned non-zero exit status {}{}", describe_status(.status), format_output(.output))]
    Compile {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("Command '{command}' returned non-zero exit status {}", describe_status(.status))]
    Execution { command: String, status: ExitStatus },

    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} does not exist.", .0.display())]
    MissingFile(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this failure came from a child process (compiler, interpreter or program)
    pub fn is_process_failure(&self) -> bool {
        matches!(
            self,
            Error::Compile { .. } | Error::Execution { .. } | Error::Spawn { .. }
        )
    }

    /// Whether this failure came from reading or writing one of the harness files
    pub fn is_file_failure(&self) -> bool {
        matches!(
            self,
            Error::File { .. } | Error::MissingFile(_) | Error::IoError(_)
        )
    }
}

fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => code.to_string(),
        None => status.to_string(),
    }
}

fn format_output(output: &str) -> String {
    let trimmed = output.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{trimmed}")
    }
}

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_message() {
        let err = Error::UnsupportedLanguage {
            path: PathBuf::from("solution.rb"),
        };
        let message = err.to_string();
        assert!(message.starts_with("Unsupported language."));
        assert!(message.contains("solution.rb"));
    }

    #[test]
    fn test_missing_file_names_the_file() {
        let err = Error::MissingFile(PathBuf::from("expected.txt"));
        assert_eq!(err.to_string(), "expected.txt does not exist.");
        assert!(err.is_file_failure());
        assert!(!err.is_process_failure());
    }

    #[test]
    fn test_format_output_skips_blank_output() {
        assert_eq!(format_output("  \n"), "");
        assert_eq!(format_output("error: x\n"), ":\nerror: x");
    }
}
