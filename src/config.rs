use std::path::{Path, PathBuf};

/// File name of the collection, resolved against the working directory.
pub const DEFAULT_STORAGE_FILE: &str = "data.json";

/// Runtime settings. The application exposes no flags or environment
/// variables; the only knob is where the collection lives, and tests are the
/// main reason it is configurable at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding the collection. Relative paths resolve against the
    /// working directory.
    storage_path: PathBuf,
}

impl Config {
    /// Point the store at a specific file instead of `data.json`.
    pub fn with_storage_path(path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: path.into(),
        }
    }

    /// The file the collection is loaded from and saved to.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_storage_path(DEFAULT_STORAGE_FILE)
    }
}
