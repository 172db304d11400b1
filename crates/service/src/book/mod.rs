pub mod id;
pub mod validation;
pub mod service;

use serde::{Deserialize, Serialize};

pub use self::service::BookService;

/// A persisted book record.
/// - id: lowercase hyphenated UUID v4, assigned on creation
/// - title / author: trimmed, never empty
/// - year: `null` when unknown
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// A validated creation request, not yet assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

impl NewBook {
    pub fn into_book(self, id: String) -> Book {
        Book { id, title: self.title, author: self.author, year: self.year }
    }

    /// Same case-insensitive title and same year (two unknown years are equal).
    pub fn collides_with(&self, existing: &Book) -> bool {
        existing.year == self.year && existing.title.to_lowercase() == self.title.to_lowercase()
    }
}
