use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::StoreResult;
use crate::models::Book;

use super::file::{load_books, save_books};
use super::search::{Matches, SearchField};

/// The user's books plus the file they live in. Every mutation rewrites the
/// whole file before returning, so memory and storage agree between calls.
#[derive(Debug)]
pub struct BookCollection {
    /// Storage file every save overwrites.
    path: PathBuf,
    /// Books in insertion order, which is also display order.
    books: Vec<Book>,
}

impl BookCollection {
    /// Load the collection from the configured storage location.
    pub fn open(config: &Config) -> StoreResult<Self> {
        let path = config.storage_path().to_path_buf();
        let books = load_books(&path)?;
        Ok(Self { path, books })
    }

    /// Location of the storage file backing this collection.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of every book in collection order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books, duplicates included.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True for a fresh store or one whose last book was removed.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Write the full collection back to storage.
    pub fn save(&self) -> StoreResult<()> {
        save_books(&self.path, &self.books)
    }

    /// Append `book` and persist. Titles are not checked for uniqueness.
    pub fn add(&mut self, book: Book) -> StoreResult<()> {
        self.books.push(book);
        self.save()
    }

    /// Remove the first book whose title equals `title` ignoring case.
    /// Returns `None` without touching storage when nothing matches.
    pub fn remove(&mut self, title: &str) -> StoreResult<Option<Book>> {
        let wanted = title.to_lowercase();
        let Some(index) = self
            .books
            .iter()
            .position(|book| book.title.to_lowercase() == wanted)
        else {
            return Ok(None);
        };

        let removed = self.books.remove(index);
        self.save()?;
        Ok(Some(removed))
    }

    /// Books whose title or author contains `query`, ignoring case, in
    /// collection order. `field` does not restrict which fields are checked.
    pub fn search(&self, query: &str, field: SearchField) -> Matches<'_> {
        if field != SearchField::Any {
            debug!(?field, "search field choice does not narrow matching");
        }
        Matches::new(&self.books, query)
    }

    /// Every book paired with its 1-based display position.
    pub fn list_all(&self) -> impl Iterator<Item = (usize, &Book)> + Clone + '_ {
        (1..).zip(self.books.iter())
    }
}
