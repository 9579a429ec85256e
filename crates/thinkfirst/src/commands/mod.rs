pub mod check;
pub mod host;
pub mod stats;
pub mod version;

use std::path::Path;
use thinkfirst_store::Paths;

/// `--data-dir` wins over the environment and home directory defaults
pub fn resolve_paths(data_dir: Option<&Path>) -> std::io::Result<Paths> {
    match data_dir {
        Some(dir) => Ok(Paths::with_root(dir)),
        None => Paths::new(),
    }
}
