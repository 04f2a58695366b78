use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{BytecodeConfig, InterpretedConfig, NativeConfig};

pub const CONFIG_FILE_NAMES: [&str; 2] = [".judge-runner.json", "judge-runner.json"];
pub const DEFAULT_CONTEXT_LINES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    // Toolchain specific configurations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<NativeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<BytecodeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreted: Option<InterpretedConfig>,

    /// Unchanged lines shown around each diff hunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_lines: Option<usize>,

    // Where this config was read from (internal, not exposed in JSON)
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.source = Some(path.to_path_buf());
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the config that applies to `source_file`, falling back to defaults
    pub fn discover(source_file: &Path) -> Result<Self> {
        let absolute = std::path::absolute(source_file)?;
        let start = absolute.parent().unwrap_or(&absolute);

        match Self::find_config_file(start) {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file found above {:?}, using defaults", start);
                Ok(Self::default())
            }
        }
    }

    pub fn native(&self) -> NativeConfig {
        self.native.clone().unwrap_or_default()
    }

    pub fn bytecode(&self) -> BytecodeConfig {
        self.bytecode.clone().unwrap_or_default()
    }

    pub fn interpreted(&self) -> InterpretedConfig {
        self.interpreted.clone().unwrap_or_default()
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines.unwrap_or(DEFAULT_CONTEXT_LINES)
    }
}
