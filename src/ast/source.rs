use serde::Deserialize;
use std::fmt;

/// Where a command came from. Carried through the tree for diagnostics,
/// never printed by the renderer.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "first")]
    pub line: u32,
    #[serde(default = "first")]
    pub column: u32,
}

fn first() -> u32 {
    1
}

impl SourceLocation {
    pub fn new(file: Option<String>, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(None, 1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}
