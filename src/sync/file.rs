//! Atomic file operations for sync.
//!
//! This module provides the file primitives both stores are written through:
//! - Atomic writes: write to temp file, sync to disk, then rename
//! - Optional reads: a missing file is an empty input, not an error

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::sync::types::{SyncError, SyncResult};

/// Temp file used while writing `path`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically.
///
/// This function:
/// 1. Writes content to a temporary file (same path with a `.tmp` suffix)
/// 2. Calls `fsync` to ensure data is on disk
/// 3. Atomically renames the temp file to the target path
///
/// If any step fails, the original file (if any) remains untouched.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write(path: &Path, content: &str) -> SyncResult<()> {
    let temp_path = temp_path(path);

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }

    {
        let file = File::create(&temp_path).map_err(|e| SyncError::io(&temp_path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .and_then(|()| writer.flush())
            .and_then(|()| writer.get_ref().sync_all())
            .map_err(|e| SyncError::io(&temp_path, e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| SyncError::io(path, e))?;

    Ok(())
}

/// Read a whole file, treating a missing file as absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_optional(path: &Path) -> SyncResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SyncError::io(path, e)),
    }
}

/// List the visible subdirectory names of `dir`.
///
/// Dot-prefixed entries are skipped. A missing directory lists as empty.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed.
pub fn list_subdirs(dir: &Path) -> SyncResult<Vec<String>> {
    list_entries(dir, |path| path.is_dir())
        .map(|paths| paths.into_iter().filter_map(|p| file_name(&p)).collect())
}

/// List the files in `dir` with the given extension, sorted by path.
///
/// A missing directory lists as empty.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> SyncResult<Vec<PathBuf>> {
    list_entries(dir, |path| {
        path.is_file() && path.extension().is_some_and(|ext| ext == extension)
    })
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> SyncResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(SyncError::io(dir, e)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SyncError::io(dir, e))?.path();
        let hidden = file_name(&path).is_none_or(|name| name.starts_with('.'));
        if !hidden && keep(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
}
