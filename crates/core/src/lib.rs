//! judge-runner - compile a solution, run it against an input file and diff
//! its output with the expected output
//!
//! This crate provides functionality to:
//! - Select a toolchain (native C++, Java bytecode, Python) from a source file extension
//! - Compile and execute the program with stdin/stdout redirected to files
//! - Produce a unified diff of expected versus actual output
pub mod command;
pub mod config;
pub mod diff;
pub mod error;
pub mod runner;
pub mod toolchain;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::ProcessCommand;
pub use config::Config;
pub use diff::{DiffResult, UnifiedDiff};
pub use runner::{Harness, Plan, ProgressSink, Report, Silent, Stage};
pub use toolchain::Toolchain;
