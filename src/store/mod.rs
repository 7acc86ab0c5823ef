//! Persistence and in-memory querying, split across logical submodules.

mod collection;
mod file;
mod search;

pub use collection::BookCollection;
pub use file::{load_books, save_books};
pub use search::{Matches, SearchField};
