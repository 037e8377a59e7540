//! Catalog file read/write primitives.
//!
//! # Responsibility
//! - Parse the on-disk JSON array into records and serialize it back.
//! - Preserve corrupt files by renaming them to a sibling backup path.
//!
//! # Invariants
//! - `write_catalog` goes through a sibling temporary file and a rename,
//!   so the target path never holds a partially written document.
//! - Read failures are classified as `Missing`, `Corrupt` or `Io`; the
//!   recovery policy itself lives in the repository layer.

use super::{StorageError, StorageResult};
use crate::model::book::Book;
use log::{error, info, warn};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads the whole catalog from `path`.
///
/// # Errors
/// - `StorageError::Missing` when the file does not exist.
/// - `StorageError::Corrupt` when the file cannot be parsed as a catalog.
/// - `StorageError::Io` for any other read failure.
pub fn read_catalog(path: &Path) -> StorageResult<Vec<Book>> {
    let started_at = Instant::now();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=catalog_read module=storage status=missing path={}",
                path.display()
            );
            return Err(StorageError::Missing(path.to_path_buf()));
        }
        Err(err) => {
            error!(
                "event=catalog_read module=storage status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StorageError::Io(err));
        }
    };

    match serde_json::from_str::<Vec<Book>>(&raw) {
        Ok(books) => {
            info!(
                "event=catalog_read module=storage status=ok path={} count={} duration_ms={}",
                path.display(),
                books.len(),
                started_at.elapsed().as_millis()
            );
            Ok(books)
        }
        Err(err) => {
            warn!(
                "event=catalog_read module=storage status=corrupt path={} error={}",
                path.display(),
                err
            );
            Err(StorageError::Corrupt {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
        }
    }
}

/// Replaces the catalog at `path` with the given records.
///
/// The document is written to a sibling temporary file first and renamed
/// onto the target, so an interrupted write cannot truncate an existing
/// catalog.
///
/// # Errors
/// - `StorageError::Io` when the temporary file cannot be written or the
///   rename fails.
pub fn write_catalog(path: &Path, books: &[Book]) -> StorageResult<()> {
    let started_at = Instant::now();

    let payload = serde_json::to_string_pretty(books).map_err(std::io::Error::other)?;
    let tmp_path = sibling_tmp_path(path);

    if let Err(err) = fs::write(&tmp_path, payload) {
        error!(
            "event=catalog_write module=storage status=error path={} duration_ms={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err
        );
        return Err(StorageError::Io(err));
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        error!(
            "event=catalog_write module=storage status=error path={} duration_ms={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err
        );
        let _ = fs::remove_file(&tmp_path);
        return Err(StorageError::Io(err));
    }

    info!(
        "event=catalog_write module=storage status=ok path={} count={} duration_ms={}",
        path.display(),
        books.len(),
        started_at.elapsed().as_millis()
    );
    Ok(())
}

/// Returns the sibling backup path for a catalog file.
///
/// `library_catalog.json` maps to `library_catalog.json.backup` in the
/// same directory.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("catalog"));
    name.push(".backup");
    path.with_file_name(name)
}

/// Moves a corrupt catalog file aside, replacing any previous backup.
///
/// # Errors
/// - `StorageError::Io` when the rename fails.
pub fn backup_corrupt_catalog(path: &Path) -> StorageResult<PathBuf> {
    let backup = backup_path(path);

    // fs::rename does not replace an existing destination on all
    // platforms; drop the stale backup first.
    match fs::remove_file(&backup) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(StorageError::Io(err)),
    }

    fs::rename(path, &backup)?;
    warn!(
        "event=catalog_backup module=storage status=ok path={} backup={}",
        path.display(),
        backup.display()
    );
    Ok(backup)
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("catalog"));
    name.push(".tmp");
    path.with_file_name(name)
}
