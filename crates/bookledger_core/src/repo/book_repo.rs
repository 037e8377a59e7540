//! Book repository contract and JSON-file-backed implementation.
//!
//! # Responsibility
//! - Provide stable catalog operations over the in-memory record list.
//! - Keep catalog-file details inside the core persistence boundary.
//!
//! # Invariants
//! - `isbn` uniqueness is checked before every insert.
//! - Insertion order is preserved by every listing and search result.
//! - Every successful mutation rewrites the backing file; a failed
//!   rewrite is logged and reported as `false` without rolling back the
//!   in-memory change.

use crate::model::book::Book;
use crate::storage::{self, StorageError};
use log::{error, info, warn};
use std::path::PathBuf;

/// Inventory counters, computed fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub available: usize,
    pub issued: usize,
}

/// Repository interface for catalog operations.
///
/// All operations are synchronous and retry nothing; queries are linear
/// scans over the insertion-ordered collection.
pub trait BookRepository {
    /// Adds a record, rejecting duplicate ISBNs.
    ///
    /// Returns `false` without mutating the collection when a record with
    /// the same `isbn` already exists, and `false` after appending when
    /// the catalog file could not be rewritten.
    fn add_book(&mut self, book: Book) -> bool;

    /// Exact, case-sensitive ISBN lookup.
    fn find_by_isbn(&self, isbn: &str) -> Option<&Book>;

    /// Case-insensitive substring match over titles, in insertion order.
    fn search_by_title(&self, query: &str) -> Vec<&Book>;

    /// Case-insensitive substring match over authors, in insertion order.
    fn search_by_author(&self, query: &str) -> Vec<&Book>;

    /// The full collection in insertion order.
    fn list_all(&self) -> &[Book];

    /// Issues the record with the given ISBN.
    ///
    /// Returns `false` when the record is unknown, already issued, or the
    /// catalog file could not be rewritten after the flip.
    fn issue_book(&mut self, isbn: &str) -> bool;

    /// Returns the record with the given ISBN to the shelf.
    ///
    /// Symmetric to [`BookRepository::issue_book`]: succeeds only for a
    /// currently issued record.
    fn return_book(&mut self, isbn: &str) -> bool;

    /// Fresh total/available/issued counters.
    fn statistics(&self) -> InventoryStats;

    /// Rewrites the whole catalog file from the in-memory collection.
    ///
    /// Failure is logged and reported as `false`, never raised.
    fn persist(&self) -> bool;
}

/// JSON-file-backed book repository.
///
/// Owns the in-memory collection and mirrors it to one catalog file for
/// the whole process lifetime. The file is exclusively owned by this
/// instance; there is no locking and no detection of external edits.
pub struct JsonCatalogRepository {
    books: Vec<Book>,
    catalog_path: PathBuf,
}

impl JsonCatalogRepository {
    /// Opens the catalog at `path`, applying the load recovery policy:
    ///
    /// - missing file: start empty and immediately establish the file;
    /// - corrupt file: rename it to the sibling backup path (replacing a
    ///   previous backup), start empty, rewrite a fresh empty catalog;
    /// - any other read failure: start empty and leave the file alone.
    ///
    /// None of these outcomes is fatal; a failed establishing write is
    /// logged and absorbed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let catalog_path = path.into();

        let books = match storage::read_catalog(&catalog_path) {
            Ok(books) => books,
            Err(StorageError::Missing(_)) => {
                warn!(
                    "event=catalog_open module=repo status=missing path={} action=create",
                    catalog_path.display()
                );
                if let Err(err) = storage::write_catalog(&catalog_path, &[]) {
                    error!(
                        "event=catalog_open module=repo status=error path={} error={}",
                        catalog_path.display(),
                        err
                    );
                }
                Vec::new()
            }
            Err(StorageError::Corrupt { .. }) => {
                match storage::backup_corrupt_catalog(&catalog_path) {
                    Ok(backup) => {
                        warn!(
                            "event=catalog_open module=repo status=recovered path={} backup={}",
                            catalog_path.display(),
                            backup.display()
                        );
                        if let Err(err) = storage::write_catalog(&catalog_path, &[]) {
                            error!(
                                "event=catalog_open module=repo status=error path={} error={}",
                                catalog_path.display(),
                                err
                            );
                        }
                    }
                    Err(err) => {
                        error!(
                            "event=catalog_open module=repo status=error path={} error={}",
                            catalog_path.display(),
                            err
                        );
                    }
                }
                Vec::new()
            }
            Err(StorageError::Io(err)) => {
                error!(
                    "event=catalog_open module=repo status=error path={} error={}",
                    catalog_path.display(),
                    err
                );
                Vec::new()
            }
        };

        info!(
            "event=catalog_open module=repo status=ok path={} count={}",
            catalog_path.display(),
            books.len()
        );

        Self {
            books,
            catalog_path,
        }
    }

    /// Path of the backing catalog file.
    pub fn catalog_path(&self) -> &std::path::Path {
        &self.catalog_path
    }
}

impl BookRepository for JsonCatalogRepository {
    fn add_book(&mut self, book: Book) -> bool {
        if self.books.iter().any(|existing| existing.isbn == book.isbn) {
            warn!(
                "event=book_add module=repo status=duplicate isbn={}",
                book.isbn
            );
            return false;
        }

        let isbn = book.isbn.clone();
        let title = book.title.clone();
        self.books.push(book);

        let persisted = self.persist();
        if persisted {
            info!(
                "event=book_add module=repo status=ok isbn={isbn} title={title} count={}",
                self.books.len()
            );
        } else {
            error!("event=book_add module=repo status=persist_failed isbn={isbn}");
        }
        persisted
    }

    fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        let found = self.books.iter().find(|book| book.isbn == isbn);
        match found {
            Some(book) => info!(
                "event=book_find module=repo status=ok isbn={isbn} title={}",
                book.title
            ),
            None => info!("event=book_find module=repo status=not_found isbn={isbn}"),
        }
        found
    }

    fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        let matches: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect();
        info!(
            "event=book_search module=repo status=ok field=title query={query} count={}",
            matches.len()
        );
        matches
    }

    fn search_by_author(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        let matches: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.author.to_lowercase().contains(&needle))
            .collect();
        info!(
            "event=book_search module=repo status=ok field=author query={query} count={}",
            matches.len()
        );
        matches
    }

    fn list_all(&self) -> &[Book] {
        info!(
            "event=book_list module=repo status=ok count={}",
            self.books.len()
        );
        &self.books
    }

    fn issue_book(&mut self, isbn: &str) -> bool {
        let Some(book) = self.books.iter_mut().find(|book| book.isbn == isbn) else {
            warn!("event=book_issue module=repo status=not_found isbn={isbn}");
            return false;
        };

        if !book.issue() {
            warn!("event=book_issue module=repo status=already_issued isbn={isbn}");
            return false;
        }
        let title = book.title.clone();

        let persisted = self.persist();
        if persisted {
            info!("event=book_issue module=repo status=ok isbn={isbn} title={title}");
        } else {
            error!("event=book_issue module=repo status=persist_failed isbn={isbn}");
        }
        persisted
    }

    fn return_book(&mut self, isbn: &str) -> bool {
        let Some(book) = self.books.iter_mut().find(|book| book.isbn == isbn) else {
            warn!("event=book_return module=repo status=not_found isbn={isbn}");
            return false;
        };

        if !book.return_item() {
            warn!("event=book_return module=repo status=not_issued isbn={isbn}");
            return false;
        }
        let title = book.title.clone();

        let persisted = self.persist();
        if persisted {
            info!("event=book_return module=repo status=ok isbn={isbn} title={title}");
        } else {
            error!("event=book_return module=repo status=persist_failed isbn={isbn}");
        }
        persisted
    }

    fn statistics(&self) -> InventoryStats {
        let total = self.books.len();
        let available = self.books.iter().filter(|book| book.is_available()).count();
        let stats = InventoryStats {
            total,
            available,
            issued: total - available,
        };
        info!(
            "event=book_stats module=repo status=ok total={} available={} issued={}",
            stats.total, stats.available, stats.issued
        );
        stats
    }

    fn persist(&self) -> bool {
        match storage::write_catalog(&self.catalog_path, &self.books) {
            Ok(()) => true,
            Err(err) => {
                error!(
                    "event=catalog_persist module=repo status=error path={} error={}",
                    self.catalog_path.display(),
                    err
                );
                false
            }
        }
    }
}
