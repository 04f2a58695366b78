//! Line-based comparison of expected and actual program output

pub mod unified;

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

pub use unified::{DEFAULT_DEADLINE, NO_NEWLINE_MARKER, UnifiedDiff};

/// Unified diff lines; empty when the compared files are identical
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    lines: Vec<String>,
}

impl DiffResult {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|line| line.starts_with('-') && !line.starts_with("---"))
            .map(|line| &line[1..])
    }

    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|line| line.starts_with('+') && !line.starts_with("+++"))
            .map(|line| &line[1..])
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Rewrite `\r\n` and lone `\r` line endings as `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Split into lines, each keeping its `\n` terminator
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Diff `expected` (the "from" side) against `actual` (the "to" side).
/// Line endings are normalized first, so CRLF and LF files compare equal.
pub fn diff_text(expected: &str, actual: &str, renderer: &UnifiedDiff) -> DiffResult {
    let expected = normalize_newlines(expected);
    let actual = normalize_newlines(actual);
    let expected_lines = split_lines(&expected);
    let actual_lines = split_lines(&actual);
    DiffResult::new(renderer.render(&expected_lines, &actual_lines))
}

pub fn diff_files(output_file: &Path, expected_output_file: &Path, renderer: &UnifiedDiff) -> Result<DiffResult> {
    let actual = read_text(output_file)?;
    let expected = read_text(expected_output_file)?;
    let result = diff_text(&expected, &actual, renderer);
    tracing::debug!(
        "Compared {:?} with {:?}: {} diff lines",
        output_file,
        expected_output_file,
        result.lines().len()
    );
    Ok(result)
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
