//! Book store CLI entry point.
//!
//! # Responsibility
//! - Open the database, apply the seed script, and list every book to
//!   standard output, one per line.
//! - Exit non-zero with a diagnostic when any step fails.

use bookstore_core::{
    default_log_level, init_logging, open_db, seed_from_file, BookService, SqliteBookRepository,
};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookstore", about = "List the seeded book store catalogue", version)]
struct Cli {
    /// SQLite database path.
    #[arg(long, env = "BOOKSTORE_DB", default_value = "book_store.db")]
    db: PathBuf,

    /// SQL seed script applied before listing.
    #[arg(long, env = "BOOKSTORE_SEED", default_value = "seeds/book_store.sql")]
    seed: PathBuf,

    /// Absolute directory for rotating log files. File logging is skipped
    /// when unset.
    #[arg(long, env = "BOOKSTORE_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), &log_dir.to_string_lossy())?;
    }

    // The connection drops (and closes) on every exit path, error paths
    // included.
    let conn = open_db(&cli.db)?;
    seed_from_file(&conn, &cli.seed)?;

    let service = BookService::new(SqliteBookRepository::new(&conn));
    for book in service.list_books()? {
        println!("{book}");
    }

    Ok(())
}
