//! JSON persistence of the student book.

use std::path::Path;

use crate::error::StorageError;
use crate::model::StudentBook;

fn read_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Read {
        path: path.display().to_string(),
        source,
    }
}

fn write_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Write {
        path: path.display().to_string(),
        source,
    }
}

pub fn book_to_pretty_json(book: &StudentBook) -> Result<String, StorageError> {
    serde_json::to_string_pretty(book).map_err(StorageError::Serialize)
}

pub fn book_from_json(path: &Path, json: &str) -> Result<StudentBook, StorageError> {
    serde_json::from_str::<StudentBook>(json).map_err(|source| StorageError::Corrupted {
        path: path.display().to_string(),
        source,
    })
}

/// Loads the book at `path`. A missing file is an empty book.
pub fn load_book(path: impl AsRef<Path>) -> Result<StudentBook, StorageError> {
    let path = path.as_ref();
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no data file, starting with an empty book");
            return Ok(StudentBook::new());
        }
        Err(e) => return Err(read_error(path, e)),
    };
    let book = book_from_json(path, &json)?;
    let duplicates = book.duplicate_names();
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "data file holds students sharing a name");
    }
    tracing::info!(path = %path.display(), students = book.len(), "loaded student book");
    Ok(book)
}

/// Writes the book as pretty JSON, creating parent directories.
pub fn save_book(path: impl AsRef<Path>, book: &StudentBook) -> Result<(), StorageError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }
    }
    let json = book_to_pretty_json(book)?;
    std::fs::write(path, json).map_err(|e| write_error(path, e))?;
    tracing::info!(path = %path.display(), students = book.len(), "saved student book");
    Ok(())
}
