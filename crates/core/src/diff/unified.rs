use std::time::{Duration, Instant};

use similar::{Algorithm, DiffTag, capture_diff_slices_deadline, group_diff_ops};

pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Time allowed for a minimal diff; past it the edit script gets coarser but
/// stays valid
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

/// Unified diff renderer over line sequences
#[derive(Debug, Clone)]
pub struct UnifiedDiff {
    from_label: String,
    to_label: String,
    context: usize,
    deadline: Duration,
}

impl Default for UnifiedDiff {
    fn default() -> Self {
        Self {
            from_label: "expected_output".to_string(),
            to_label: "actual_output".to_string(),
            context: crate::config::DEFAULT_CONTEXT_LINES,
            deadline: DEFAULT_DEADLINE,
        }
    }
}

impl UnifiedDiff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, from_label: impl Into<String>, to_label: impl Into<String>) -> Self {
        self.from_label = from_label.into();
        self.to_label = to_label.into();
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Diff lines of `from` against `to`. Lines keep their terminators; the
    /// rendered output does not.
    pub fn render(&self, from: &[&str], to: &[&str]) -> Vec<String> {
        let ops = capture_diff_slices_deadline(
            Algorithm::Myers,
            from,
            to,
            Some(Instant::now() + self.deadline),
        );
        let mut out = Vec::new();

        for group in group_diff_ops(ops, self.context) {
            if out.is_empty() {
                out.push(format!("--- {}", self.from_label));
                out.push(format!("+++ {}", self.to_label));
            }

            let (first, last) = match (group.first(), group.last()) {
                (Some(first), Some(last)) => (first, last),
                _ => continue,
            };
            out.push(format!(
                "@@ -{} +{} @@",
                format_range(first.old_range().start, last.old_range().end),
                format_range(first.new_range().start, last.new_range().end)
            ));

            for op in &group {
                let (tag, old_range, new_range) = op.as_tag_tuple();
                if tag == DiffTag::Equal {
                    push_lines(&mut out, ' ', &from[old_range]);
                    continue;
                }
                if matches!(tag, DiffTag::Replace | DiffTag::Delete) {
                    push_lines(&mut out, '-', &from[old_range]);
                }
                if matches!(tag, DiffTag::Replace | DiffTag::Insert) {
                    push_lines(&mut out, '+', &to[new_range]);
                }
            }
        }

        out
    }
}

/// `start,len` with 1-based start; a single line drops the length and an
/// empty range points at the line before it
fn format_range(start: usize, stop: usize) -> String {
    let mut beginning = start + 1;
    let length = stop - start;
    if length == 1 {
        return beginning.to_string();
    }
    if length == 0 {
        beginning -= 1;
    }
    format!("{beginning},{length}")
}

fn push_lines(out: &mut Vec<String>, prefix: char, lines: &[&str]) {
    for line in lines {
        match line.strip_suffix('\n') {
            Some(content) => out.push(format!("{prefix}{content}")),
            None => {
                out.push(format!("{prefix}{line}"));
                out.push(NO_NEWLINE_MARKER.to_string());
            }
        }
    }
}
