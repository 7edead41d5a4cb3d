//! Book domain model.
//!
//! # Responsibility
//! - Define the value object mapped from `books` rows.
//!
//! # Invariants
//! - A `Book` is only ever constructed fully populated.
//! - Equality is value equality over all three fields.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for a book: the `books.id` primary key.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

/// Immutable record for one row of the `books` table.
///
/// Field names match the column names, so the serde wire shape and the
/// storage schema stay aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author_name: String,
}

impl Book {
    /// Creates a fully-populated book record.
    pub fn new(id: BookId, title: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author_name: author_name.into(),
        }
    }
}

impl Display for Book {
    /// Renders as `Book(<id>, <title>, <author_name>)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Book({}, {}, {})", self.id, self.title, self.author_name)
    }
}
