//! Paramdex name files.
//!
//! Paramdex keeps one plain-text file per param, `Names/<Param>.txt`, with one
//! row per line:
//!
//! ```text
//! 1000 Dagger
//! 1001 UNKNOWN
//! 2000 A name that
//! spills onto a second line
//! ```
//!
//! A line that does not start with `<id><space>` continues the previous row's
//! name. `UNKNOWN` marks a row that is known to exist but has no name; it is
//! read as an empty name and written back for empty names, so it never leaves
//! this module. Japanese-only names live in `Names/jp/<Param>.txt` in the same
//! format.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{JAPANESE_DIR, NAMES_DIR, NAMES_EXTENSION};
use crate::model::{Record, has_any_name};
use crate::sync::file::{atomic_write, list_files_with_extension, read_optional};
use crate::sync::{SyncError, SyncResult};

/// On-disk stand-in for a row without a name.
pub const UNKNOWN: &str = "UNKNOWN";

/// Parse the contents of a name file.
///
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `SyncError::InvalidLine` if text appears before the first row.
pub fn parse_names(path: &Path, content: &str) -> SyncResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for (line_num, line) in content.lines().enumerate() {
        if let Some((id, name)) = row_start(line) {
            records.extend(current.take());
            current = Some(Record::new(id, name));
            continue;
        }

        match current.as_mut() {
            Some(record) => {
                record.name.push('\n');
                record.name.push_str(line);
            }
            None => {
                return Err(SyncError::InvalidLine {
                    path: path.to_path_buf(),
                    line: line_num + 1,
                    content: line.to_string(),
                });
            }
        }
    }
    records.extend(current);

    for record in &mut records {
        if record.name == UNKNOWN {
            record.name.clear();
        }
    }
    Ok(records)
}

/// The row ID and name text if `line` starts a new row.
fn row_start(line: &str) -> Option<(i64, &str)> {
    let (id, name) = line.split_once(' ')?;
    Some((id.parse().ok()?, name))
}

/// Serialize rows in name file format.
///
/// Every row ends with a newline; empty names are written as [`UNKNOWN`].
#[must_use]
pub fn format_names(records: &[Record]) -> String {
    let mut content = String::new();
    for record in records {
        let name = if record.is_unnamed() {
            UNKNOWN
        } else {
            &record.name
        };
        content.push_str(&format!("{} {name}\n", record.id));
    }
    content
}

/// Read a name file. A missing file reads as no rows.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn read_names(path: &Path) -> SyncResult<Vec<Record>> {
    match read_optional(path)? {
        Some(content) => parse_names(path, &content),
        None => Ok(Vec::new()),
    }
}

/// Write a name file atomically.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_names(path: &Path, records: &[Record]) -> SyncResult<()> {
    atomic_write(path, &format_names(records))
}

/// Path of the main name file for `param`.
#[must_use]
pub fn names_path(game_dir: &Path, param: &str) -> PathBuf {
    game_dir
        .join(NAMES_DIR)
        .join(format!("{param}.{NAMES_EXTENSION}"))
}

/// Path of the Japanese-only name file for `param`.
#[must_use]
pub fn japanese_names_path(game_dir: &Path, param: &str) -> PathBuf {
    game_dir
        .join(NAMES_DIR)
        .join(JAPANESE_DIR)
        .join(format!("{param}.{NAMES_EXTENSION}"))
}

/// Names of the params that have a name file in a Paramdex game directory.
///
/// # Errors
///
/// Returns an error if the names directory cannot be listed.
pub fn list_params(game_dir: &Path) -> SyncResult<Vec<String>> {
    let files = list_files_with_extension(&game_dir.join(NAMES_DIR), NAMES_EXTENSION)?;
    Ok(files
        .iter()
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()))
        .map(String::from)
        .collect())
}

/// One param's rows as stored in Paramdex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamdexParam {
    /// Param name (file stem).
    pub name: String,
    /// Rows from `Names/<Param>.txt`.
    pub rows: Vec<Record>,
    /// Rows from `Names/jp/<Param>.txt`.
    pub japanese_rows: Vec<Record>,
}

impl ParamdexParam {
    /// Load a param's name files from a Paramdex game directory.
    ///
    /// Missing files load as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or is malformed.
    pub fn load(game_dir: &Path, name: &str) -> SyncResult<Self> {
        Ok(Self {
            name: name.to_string(),
            rows: read_names(&names_path(game_dir, name))?,
            japanese_rows: read_names(&japanese_names_path(game_dir, name))?,
        })
    }

    /// Number of files [`save`](Self::save) would write.
    ///
    /// Nothing is written unless some row has a name, and the Japanese file
    /// is only written when it has rows. Existing files are never removed.
    #[must_use]
    pub fn files_to_write(&self) -> usize {
        match (has_any_name(&self.rows), self.japanese_rows.is_empty()) {
            (false, _) => 0,
            (true, true) => 1,
            (true, false) => 2,
        }
    }

    /// Write this param's name files.
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be written.
    pub fn save(&self, game_dir: &Path) -> SyncResult<usize> {
        let files = self.files_to_write();
        if files == 0 {
            debug!(param = %self.name, "No named rows, skipping write");
            return Ok(0);
        }

        write_names(&names_path(game_dir, &self.name), &self.rows)?;
        if files > 1 {
            write_names(&japanese_names_path(game_dir, &self.name), &self.japanese_rows)?;
        }
        Ok(files)
    }
}
