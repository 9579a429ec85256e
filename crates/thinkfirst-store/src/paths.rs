//! Path resolution for persisted state

use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "THINKFIRST_HOME";

/// Resolves standard paths for persisted files
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve the data directory: `$THINKFIRST_HOME`, else `~/.thinkfirst`
    pub fn new() -> std::io::Result<Self> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(root));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_root(home.join(".thinkfirst")))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get counters.json path
    pub fn counters_file(&self) -> PathBuf {
        self.root.join("counters.json")
    }
}
