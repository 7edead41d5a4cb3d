use bookstore_core::db::{open_db_in_memory, seed_from_file};
use bookstore_core::{Book, BookRepository, BookService, RepoError, SqliteBookRepository};
use std::path::{Path, PathBuf};

fn seed_script_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../seeds/book_store.sql")
}

fn fixture_books() -> Vec<Book> {
    vec![
        Book::new(1, "Nineteen Eighty-Four", "George Orwell"),
        Book::new(2, "Mrs Dalloway", "Virginia Woolf"),
        Book::new(3, "Emma", "Jane Austen"),
        Book::new(4, "Dracula", "Bram Stoker"),
        Book::new(5, "The Age of Innocence", "Edith Wharton"),
    ]
}

fn create_empty_books_table(conn: &rusqlite::Connection) {
    conn.execute_batch(
        "CREATE TABLE books (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            author_name TEXT NOT NULL
        );",
    )
    .unwrap();
}

#[test]
fn all_returns_seeded_books_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    seed_from_file(&conn, seed_script_path()).unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let books = repo.all().unwrap();

    assert_eq!(books.len(), 5);
    assert_eq!(books, fixture_books());
}

#[test]
fn all_on_empty_table_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    create_empty_books_table(&conn);
    let repo = SqliteBookRepository::new(&conn);

    let books = repo.all().unwrap();

    assert!(books.is_empty());
}

#[test]
fn all_without_books_table_propagates_query_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.all().unwrap_err();

    assert!(matches!(err, RepoError::Db(_)), "unexpected error: {err}");
}

#[test]
fn repeated_reads_without_writes_are_equal() {
    let conn = open_db_in_memory().unwrap();
    seed_from_file(&conn, seed_script_path()).unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let first = repo.all().unwrap();
    let second = repo.all().unwrap();

    assert_eq!(first, second);
}

#[test]
fn all_orders_rows_by_id_regardless_of_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    create_empty_books_table(&conn);
    conn.execute_batch(
        "INSERT INTO books (id, title, author_name) VALUES
            (3, 'Emma', 'Jane Austen'),
            (1, 'Nineteen Eighty-Four', 'George Orwell'),
            (2, 'Mrs Dalloway', 'Virginia Woolf');",
    )
    .unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let ids: Vec<_> = repo.all().unwrap().into_iter().map(|book| book.id).collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn reseeding_resets_table_state() {
    let conn = open_db_in_memory().unwrap();
    seed_from_file(&conn, seed_script_path()).unwrap();
    conn.execute(
        "INSERT INTO books (id, title, author_name) VALUES (6, 'Extra', 'Nobody');",
        [],
    )
    .unwrap();

    seed_from_file(&conn, seed_script_path()).unwrap();
    let repo = SqliteBookRepository::new(&conn);

    assert_eq!(repo.all().unwrap(), fixture_books());
}

#[test]
fn null_title_is_rejected_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE books (
            id INTEGER PRIMARY KEY,
            title TEXT,
            author_name TEXT
        );
        INSERT INTO books (id, title, author_name) VALUES (1, NULL, 'Test Author');",
    )
    .unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.all().unwrap_err();

    assert!(
        matches!(err, RepoError::InvalidData(_)),
        "unexpected error: {err}"
    );
}

#[test]
fn service_wraps_repository_reads() {
    let conn = open_db_in_memory().unwrap();
    seed_from_file(&conn, seed_script_path()).unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let books = service.list_books().unwrap();

    assert_eq!(books, fixture_books());
}
