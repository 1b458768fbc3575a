//! File I/O utilities with atomic writes
//!
//! Whole-document reads and writes. Writes go to a temporary file that is
//! renamed over the destination, so a failed save leaves the previous file
//! in place.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExpenseError;

/// Read a whole document from a file
///
/// A missing or unreadable file is a `StorageRead` error.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String, ExpenseError> {
    let path = path.as_ref();

    fs::read_to_string(path)
        .map_err(|e| ExpenseError::StorageRead(format!("{}: {}", path.display(), e)))
}

/// Write a whole document to a file atomically (write to temp, then rename)
///
/// Any failure to create, write, or rename is a `StorageWrite` error.
pub fn write_document_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    let write_err = |what: &str, e: std::io::Error| {
        ExpenseError::StorageWrite(format!("{}: {}: {}", path.display(), what, e))
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_err("failed to create directory", e))?;
        }
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| write_err("failed to create temp file", e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| write_err("failed to write data", e))?;

    writer
        .flush()
        .map_err(|e| write_err("failed to flush data", e))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| write_err("failed to sync data", e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_err("failed to rename temp file", e)
    })?;

    Ok(())
}
