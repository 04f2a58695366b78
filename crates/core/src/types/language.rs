use serde::{Deserialize, Serialize};
use std::fmt;

/// Source languages the harness knows how to build and run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Cpp,
    Java,
    Python,
}

impl Language {
    /// Map a file extension (without the leading dot) to a language
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "cc" | "cpp" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            "py" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
