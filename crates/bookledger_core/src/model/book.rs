//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record shared by repository and service
//!   layers.
//! - Provide lifecycle helpers for issue/return availability transitions.
//!
//! # Invariants
//! - `isbn` is the unique key of a record; the repository rejects
//!   duplicates before they are stored.
//! - `status` is the single source of truth for availability.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Availability state of one catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// On the shelf and ready to be issued.
    Available,
    /// Lent out; must be returned before the next issue.
    Issued,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Issued => write!(f, "issued"),
        }
    }
}

/// Canonical catalog record.
///
/// Serialized as a flat four-field object (`title`, `author`, `isbn`,
/// `status`) so the on-disk catalog stays human-readable and compatible
/// with catalogs written by earlier versions of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Unique key within one catalog.
    pub isbn: String,
    pub status: BookStatus,
}

impl Book {
    /// Creates a record that starts out available.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    /// Marks the book as issued.
    ///
    /// Returns `false` without any state change when the book is already
    /// issued.
    pub fn issue(&mut self) -> bool {
        if self.status == BookStatus::Issued {
            return false;
        }
        self.status = BookStatus::Issued;
        true
    }

    /// Marks an issued book as available again.
    ///
    /// Returns `false` without any state change when the book was not
    /// issued.
    pub fn return_item(&mut self) -> bool {
        if self.status == BookStatus::Available {
            return false;
        }
        self.status = BookStatus::Available;
        true
    }

    /// Returns whether this book can currently be issued.
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {} | Author: {} | ISBN: {} | Status: {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}
