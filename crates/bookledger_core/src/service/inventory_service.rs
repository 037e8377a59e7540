//! Inventory use-case service.
//!
//! # Responsibility
//! - Provide stable catalog entry points for presentation callers.
//! - Delegate persistence to the repository implementation.
//!
//! # Invariants
//! - Service APIs never bypass repository uniqueness/persistence checks.
//! - The service layer remains storage-agnostic.

use crate::model::book::Book;
use crate::repo::book_repo::{BookRepository, InventoryStats};

/// Use-case service wrapper for catalog operations.
pub struct InventoryService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> InventoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a record built from raw field values.
    ///
    /// # Contract
    /// - The record starts out available.
    /// - Returns `false` for a duplicate ISBN or a failed catalog write.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> bool {
        self.repo.add_book(Book::new(title, author, isbn))
    }

    /// Exact, case-sensitive ISBN lookup.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.repo.find_by_isbn(isbn)
    }

    /// Case-insensitive substring title search.
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        self.repo.search_by_title(query)
    }

    /// Case-insensitive substring author search.
    pub fn search_by_author(&self, query: &str) -> Vec<&Book> {
        self.repo.search_by_author(query)
    }

    /// The full collection in insertion order.
    pub fn list_all(&self) -> &[Book] {
        self.repo.list_all()
    }

    /// Issues a record by ISBN.
    pub fn issue_book(&mut self, isbn: &str) -> bool {
        self.repo.issue_book(isbn)
    }

    /// Returns a record by ISBN.
    pub fn return_book(&mut self, isbn: &str) -> bool {
        self.repo.return_book(isbn)
    }

    /// Fresh inventory counters.
    pub fn statistics(&self) -> InventoryStats {
        self.repo.statistics()
    }

    /// Forces a whole-file rewrite of the backing catalog.
    pub fn persist(&self) -> bool {
        self.repo.persist()
    }
}
