//! Plain-text views of the collection. Rendering is kept free of I/O so the
//! exact console output can be asserted in tests.

use crate::models::Book;
use crate::store::BookCollection;

/// One abbreviated line per book, numbered from 1 in collection order.
pub fn listing_lines(collection: &BookCollection) -> Vec<String> {
    collection
        .list_all()
        .map(|(index, book)| format!("{index}. {}", book.summary()))
        .collect()
}

/// One detailed line per match, numbered from 1 in result order. An empty
/// result means there were no matches.
pub fn match_lines<'a>(matches: impl Iterator<Item = &'a Book>) -> Vec<String> {
    (1usize..)
        .zip(matches)
        .map(|(index, book)| format!("{index}. {}", book.details()))
        .collect()
}
