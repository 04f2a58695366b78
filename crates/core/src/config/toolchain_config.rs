use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_NATIVE_COMPILER: &str = "g++";
pub const DEFAULT_BYTECODE_COMPILER: &str = "javac";
pub const DEFAULT_BYTECODE_INTERPRETER: &str = "java";
pub const DEFAULT_SCRIPT_INTERPRETER: &str = "python3";

/// `.cc` / `.cpp` sources, built with `<compiler> [flags] -o <executable> <source>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NativeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
    /// Defaults to `<source_dir>/<source_stem>.out`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,
}

/// `.java` sources, built with `<compiler> [flags] <source>` and run by class name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BytecodeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
}

/// `.py` sources, run directly by the interpreter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InterpretedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
}

impl NativeConfig {
    pub fn compiler(&self) -> &str {
        self.compiler.as_deref().unwrap_or(DEFAULT_NATIVE_COMPILER)
    }

    pub fn flags(&self) -> &[String] {
        self.flags.as_deref().unwrap_or_default()
    }
}

impl BytecodeConfig {
    pub fn compiler(&self) -> &str {
        self.compiler.as_deref().unwrap_or(DEFAULT_BYTECODE_COMPILER)
    }

    pub fn flags(&self) -> &[String] {
        self.flags.as_deref().unwrap_or_default()
    }

    pub fn interpreter(&self) -> &str {
        self.interpreter
            .as_deref()
            .unwrap_or(DEFAULT_BYTECODE_INTERPRETER)
    }
}

impl InterpretedConfig {
    pub fn interpreter(&self) -> &str {
        self.interpreter
            .as_deref()
            .unwrap_or(DEFAULT_SCRIPT_INTERPRETER)
    }

    pub fn flags(&self) -> &[String] {
        self.flags.as_deref().unwrap_or_default()
    }
}
