//! File I/O utilities with atomic writes
//!
//! The plan record is written to a temp file and renamed into place so a
//! crash mid-save never corrupts the existing record. Full-device failures
//! are mapped to `QuotaExceeded` so callers can suggest exporting data.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{BinderError, BinderResult};

/// Read a JSON value from a file.
///
/// Returns `None` if the file is missing, unreadable, or unparseable.
/// First-run detection depends on this never surfacing an error.
pub fn read_json_opt<P: AsRef<Path>>(path: P) -> Option<Value> {
    let file = File::open(path.as_ref()).ok()?;
    serde_json::from_reader(BufReader::new(file)).ok()
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> BinderResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            storage_error(&format!("Failed to create directory {}", parent.display()), e)
        })?;
    }

    // Temp file in the same directory, required for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| storage_error("Failed to create temp file", e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| BinderError::Io(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| storage_error("Failed to flush data", e))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("Failed to sync data", e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("Failed to rename temp file", e)
    })?;

    Ok(())
}

/// Map an I/O error, keeping full-device conditions distinguishable
fn storage_error(context: &str, e: io::Error) -> BinderError {
    if is_quota_error(&e) {
        BinderError::QuotaExceeded
    } else {
        BinderError::Io(format!("{}: {}", context, e))
    }
}

// ENOSPC / EDQUOT (Linux, BSD) / ERROR_DISK_FULL (Windows)
fn is_quota_error(e: &io::Error) -> bool {
    matches!(e.raw_os_error(), Some(28) | Some(122) | Some(69) | Some(112))
}
