//! Catalog file persistence entry points.
//!
//! # Responsibility
//! - Read and write the JSON catalog file backing the inventory.
//! - Classify read failures so the repository can apply its recovery
//!   policy (establish, backup-and-reset, or leave untouched).
//!
//! # Invariants
//! - Writes replace the whole file; there is no append or patch path.
//! - A corrupt catalog is never deleted, only renamed to its backup path.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod catalog_file;

pub use catalog_file::{backup_corrupt_catalog, backup_path, read_catalog, write_catalog};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for catalog file access.
#[derive(Debug)]
pub enum StorageError {
    /// The catalog file does not exist yet.
    Missing(PathBuf),
    /// The catalog file exists but is not a valid catalog document.
    Corrupt { path: PathBuf, message: String },
    /// Any other I/O failure while reading or writing.
    Io(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "catalog file not found: {}", path.display()),
            Self::Corrupt { path, message } => {
                write!(f, "corrupt catalog file {}: {message}", path.display())
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Corrupt { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
