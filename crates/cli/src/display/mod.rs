pub mod command_breakdown;
pub mod formatter;
pub mod progress;

pub use command_breakdown::{format_plan, print_plan};
pub use formatter::{format_diagnostic, format_report, print_diagnostic, print_report};
pub use progress::StdoutProgress;
