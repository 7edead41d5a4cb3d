//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate the `books` table into domain value objects.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Result ordering is deterministic by `id`.
//! - Rows that cannot populate a full `Book` are rejected, not skipped.

use crate::db::DbError;
use crate::model::book::Book;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ALL_BOOKS_SQL: &str = "SELECT
    id,
    title,
    author_name
FROM books
ORDER BY id;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for reading books.
pub trait BookRepository {
    fn all(&self) -> RepoResult<Vec<Book>>;
}

/// SQLite-backed book repository.
///
/// Borrows the connection; any number of repositories may share one
/// connection, and the connection outlives them all.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    /// Reads every row of `books` in ascending `id` order.
    ///
    /// An empty table yields an empty vector. A missing table surfaces as
    /// the driver's query error.
    fn all(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(ALL_BOOKS_SQL)?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let title = row
        .get::<_, Option<String>>("title")?
        .ok_or_else(|| RepoError::InvalidData("NULL value in books.title".to_string()))?;
    let author_name = row
        .get::<_, Option<String>>("author_name")?
        .ok_or_else(|| RepoError::InvalidData("NULL value in books.author_name".to_string()))?;

    Ok(Book {
        id: row.get("id")?,
        title,
        author_name,
    })
}
