//! Child process command construction and execution

pub mod process_command;

// Re-export commonly used types
pub use process_command::ProcessCommand;
