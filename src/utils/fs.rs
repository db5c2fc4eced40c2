//! Filesystem helpers
//!
//! Writes go to a temporary file in the destination's directory and are then
//! renamed over the destination, so an interrupted write never leaves a
//! truncated file behind.

use crate::errors::{CleanupError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a whole text file
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CleanupError::file_access(path, e))
}

/// Replace `path` with `contents` via temp file and rename.
///
/// Symlinks are followed, so the file they point at is replaced and the link
/// stays. The destination keeps its permissions if it already exists.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CleanupError::file_access(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| CleanupError::file_access(path, e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions())
            .map_err(|e| CleanupError::file_access(path, e))?;
    }

    tmp.persist(&target)
        .map_err(|e| CleanupError::file_access(path, e.error))?;
    Ok(())
}
