//! CSV file I/O with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::ContactError;

/// Read every record of a header-less CSV file
///
/// Records may have differing field counts; callers decide what to keep.
/// A missing file reads as no records.
pub fn read_csv_records<P: AsRef<Path>>(path: P) -> Result<Vec<StringRecord>, ContactError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ContactError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ContactError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write records to a CSV file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_csv_atomic<P, I, R, F>(path: P, records: I) -> Result<(), ContactError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ContactError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(&temp_path)
        .map_err(|e| ContactError::Storage(format!("Failed to create temp file: {}", e)))?;

    for record in records {
        writer
            .write_record(record)
            .map_err(|e| ContactError::Storage(format!("Failed to write record: {}", e)))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| ContactError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| ContactError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ContactError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
