use judge_runner_core::{Error, Report};

pub const MATCH_MESSAGE: &str = "Output matches the expected output!";
pub const MISMATCH_MESSAGE: &str = "Output differs from expected:";

/// Lines printed once the pipeline has finished
pub fn format_report(report: &Report) -> Vec<String> {
    if report.is_match() {
        return vec![MATCH_MESSAGE.to_string()];
    }

    let mut lines = Vec::with_capacity(report.diff.lines().len() + 1);
    lines.push(MISMATCH_MESSAGE.to_string());
    lines.extend(report.diff.lines().iter().cloned());
    lines
}

/// One-line diagnostic for a failed pipeline, prefixed by the kind of failure
pub fn format_diagnostic(err: &Error) -> String {
    if err.is_process_failure() {
        format!("Error during execution: {err}")
    } else if err.is_file_failure() {
        format!("File error: {err}")
    } else {
        format!("An error occurred: {err}")
    }
}

pub fn print_report(report: &Report) {
    for line in format_report(report) {
        println!("{line}");
    }
}

pub fn print_diagnostic(err: &Error) {
    println!("{}", format_diagnostic(err));
}
