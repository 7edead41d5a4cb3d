//! Seed script execution.
//!
//! # Responsibility
//! - Load a SQL seed script from disk and execute it against a connection.
//!
//! # Invariants
//! - The script file is read in full before any SQL runs.
//! - Table state after a successful run is exactly what the script leaves
//!   behind; running the same script twice ends in the same state.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Executes the SQL script at `path` in full on the provided connection.
///
/// Seed scripts are expected to contain DROP/CREATE/INSERT statements that
/// reset the seeded tables to a known state.
///
/// # Errors
/// - [`DbError::SeedIo`] when the script file is missing or unreadable.
/// - [`DbError::Sqlite`] when the script SQL is malformed or violates a
///   constraint.
pub fn seed_from_file(conn: &Connection, path: impl AsRef<Path>) -> DbResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=db_seed module=db status=start script={}",
        path.display()
    );

    let result = fs::read_to_string(path)
        .map_err(|source| DbError::SeedIo {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|script| conn.execute_batch(&script).map_err(DbError::from));

    match &result {
        Ok(()) => info!(
            "event=db_seed module=db status=ok script={} duration_ms={}",
            path.display(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_seed module=db status=error script={} duration_ms={} error={err}",
            path.display(),
            started_at.elapsed().as_millis()
        ),
    }

    result
}
