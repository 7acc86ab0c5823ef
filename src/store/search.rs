use std::slice;

use crate::models::Book;

/// The field the user asked to search by. The choice is recorded but does not
/// narrow matching: a query is always checked against both title and author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    /// Anything other than a recognised menu answer.
    Any,
}

impl SearchField {
    /// Map the `1. Title / 2. Author` prompt answer to a field.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => SearchField::Title,
            "2" => SearchField::Author,
            _ => SearchField::Any,
        }
    }
}

/// Lazy iterator over the books whose title or author contains the query,
/// ignoring case. Cloning it restarts from the same position.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    books: slice::Iter<'a, Book>,
    needle: String,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(books: &'a [Book], query: &str) -> Self {
        Self {
            books: books.iter(),
            needle: query.to_lowercase(),
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.books.by_ref().find(|book| {
            book.title.to_lowercase().contains(needle.as_str())
                || book.author.to_lowercase().contains(needle.as_str())
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.books.size_hint().1)
    }
}
