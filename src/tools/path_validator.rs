use crate::error::{ShuffleError, ShuffleResult};
use log::debug;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// A source video must be an existing, readable regular file.
pub fn validate_source_file(path: &Path) -> ShuffleResult<()> {
    if !path.is_file() {
        return Err(ShuffleError::InputNotFound(path.to_path_buf()));
    }
    if let Err(e) = File::open(path) {
        debug!("cannot open {}: {e}", path.display());
        return Err(ShuffleError::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Directory a file is created in; `.` for a bare file name.
#[must_use]
pub fn containing_directory(file: &Path) -> &Path {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Canonical location of `file`, which need not exist yet.
///
/// A missing file is resolved through its parent directory. `None` when the
/// parent cannot be resolved either.
#[must_use]
pub fn resolve_location(file: &Path) -> Option<PathBuf> {
    if let Ok(path) = fs::canonicalize(file) {
        return Some(path);
    }
    let name = file.file_name()?;
    fs::canonicalize(containing_directory(file))
        .ok()
        .map(|parent| parent.join(name))
}

pub fn ensure_directory_exists(path: &Path) -> ShuffleResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            ShuffleError::io(format!("Failed to create directory {}", path.display()), e)
        })?;
    }
    Ok(())
}

/// Creates the parent directory of `file` when it has a non-empty one.
pub fn ensure_parent_exists(file: &Path) -> ShuffleResult<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

/// True when `path` is missing or an empty directory.
#[must_use]
pub fn is_missing_or_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => !path.exists(),
    }
}
