//! Book use-case service.
//!
//! # Responsibility
//! - Provide a stable read entry point for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - The service layer remains storage-agnostic.

use crate::model::book::Book;
use crate::repo::book_repo::{BookRepository, RepoResult};

/// Use-case service wrapper over a book repository.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every book in the store, ordered by id.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.all()
    }
}
