use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the persistence layer. A missing or undecodable file is not an
/// error; it loads as an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage file exists but could not be read, for example because of
    /// missing permissions.
    #[error("failed to read book collection from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the parent directory or overwriting the file failed. Fatal
    /// for the operation that triggered the save.
    #[error("failed to write book collection to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding the collection as JSON failed before anything was written.
    #[error("failed to serialize book collection")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used throughout the persistence layer.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
