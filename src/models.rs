//! Domain model persisted to the JSON storage file. `Book` stays a plain data
//! holder; formatting helpers live here so the listing and search views agree
//! on how a record reads.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single book in the collection. Field names are the storage keys and must
/// not be renamed.
pub struct Book {
    /// Lookup key for removal. Duplicates are allowed.
    pub title: String,
    /// Author name, matched by search alongside the title.
    pub author: String,
    /// Kept as free text so existing data files round-trip untouched. Files
    /// that stored the year as a JSON number still load; it is written back
    /// as a string.
    #[serde(deserialize_with = "text_or_number")]
    pub year: String,
    /// Free-form genre, shown only in search results.
    pub genre: String,
    /// Whether the user has finished the book.
    pub read: bool,
}

impl Book {
    /// Build a record from anything string-like.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// `Read` or `Unread`, as shown in search results.
    pub fn read_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }

    /// Short `Title by Author (Year)` form used by the full listing.
    pub fn summary(&self) -> String {
        format!("{} by {} ({})", self.title, self.author, self.year)
    }

    /// Long form used by search results, adding genre and read status.
    pub fn details(&self) -> String {
        format!("{} - {} - {}", self.summary(), self.genre, self.read_label())
    }
}

/// Accept either a JSON string or a JSON number, keeping the text form.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

/// Interpret a yes/no answer. Only `yes` (any case, surrounding whitespace
/// ignored) counts as read.
pub fn parse_read_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
