//! Configuration management for judge-runner

mod settings;
pub mod toolchain_config;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_CONTEXT_LINES};
pub use toolchain_config::{BytecodeConfig, InterpretedConfig, NativeConfig};
