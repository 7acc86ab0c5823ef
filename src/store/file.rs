use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::Book;

/// Indentation used for the storage file, matching existing data files.
const INDENT: &[u8] = b"    ";

/// Read every book stored at `path`. A missing file or content that does not
/// decode as a list of books yields an empty collection; any other read
/// failure is returned.
pub fn load_books(path: &Path) -> StoreResult<Vec<Book>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no storage file yet, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match serde_json::from_slice::<Vec<Book>>(&bytes) {
        Ok(books) => {
            debug!(path = %path.display(), count = books.len(), "loaded book collection");
            Ok(books)
        }
        Err(err) => {
            info!(path = %path.display(), error = %err, "storage file is not a book list, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Overwrite `path` with the full, pretty-printed collection.
pub fn save_books(path: &Path, books: &[Book]) -> StoreResult<()> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    books.serialize(&mut serializer)?;

    let written = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::create_dir_all(parent).and_then(|()| fs::write(path, &buf)),
        None => fs::write(path, &buf),
    };
    if let Err(source) = written {
        warn!(path = %path.display(), error = %source, "could not write book collection");
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    debug!(path = %path.display(), count = books.len(), "saved book collection");
    Ok(())
}
