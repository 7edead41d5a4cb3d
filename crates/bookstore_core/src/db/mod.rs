//! SQLite session bootstrap and seed script execution.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the book store.
//! - Execute seed scripts that reset table state in full.
//!
//! # Invariants
//! - Connections are fully configured before callers can run queries.
//! - A dropped connection closes its session on every exit path.
//! - Connections are single-threaded resources; `rusqlite::Connection` is
//!   `!Sync`, so sharing one across threads does not compile.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod open;
mod seed;

pub use open::{open_db, open_db_in_memory};
pub use seed::seed_from_file;

pub type DbResult<T> = Result<T, DbError>;

/// Storage-layer error for connection bootstrap and seed execution.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    SeedIo { path: PathBuf, source: io::Error },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SeedIo { path, source } => {
                write!(f, "cannot read seed script `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SeedIo { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
