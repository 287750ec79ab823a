//! Sync types shared by both sync directions.
//!
//! This module defines the statistics reported by a sync run and the
//! errors raised by the store and sync layers.

use std::path::PathBuf;

use serde::Serialize;

/// Direction of a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Paramdex names flow into Smithbox's row name documents.
    ParamdexToSmithbox,
    /// Smithbox names flow into Paramdex's per-table name files.
    SmithboxToParamdex,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParamdexToSmithbox => write!(f, "paramdex -> smithbox"),
            Self::SmithboxToParamdex => write!(f, "smithbox -> paramdex"),
        }
    }
}

/// Options controlling a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Replace existing non-empty names with the supplying side's name.
    pub overwrite: bool,
    /// Read and merge everything, but write nothing.
    pub dry_run: bool,
    /// Skip copying schema definitions to Paramdex.
    pub skip_defs: bool,
}

/// Statistics for merging one table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Unnamed rows that received a name.
    pub names_filled: usize,
    /// Named rows whose name was replaced (overwrite mode only).
    pub names_replaced: usize,
    /// Rows created between existing rows.
    pub rows_inserted: usize,
    /// Rows added after the last existing row.
    pub rows_appended: usize,
    /// Leftover Paramdex rows that could not be placed in Smithbox.
    pub rows_dropped: usize,
    /// Japanese-only names split off from Paramdex names.
    pub japanese_names: usize,
}

impl MergeStats {
    /// Number of rows whose name or presence changed.
    #[must_use]
    pub fn changes(&self) -> usize {
        self.names_filled + self.names_replaced + self.rows_inserted + self.rows_appended
    }

    /// Accumulate another table's statistics.
    pub fn add(&mut self, other: &Self) {
        self.names_filled += other.names_filled;
        self.names_replaced += other.names_replaced;
        self.rows_inserted += other.rows_inserted;
        self.rows_appended += other.rows_appended;
        self.rows_dropped += other.rows_dropped;
        self.japanese_names += other.japanese_names;
    }
}

/// Statistics for syncing one game.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GameStats {
    /// Game abbreviation (directory name).
    pub game: String,
    /// Number of tables considered.
    pub tables: usize,
    /// Number of table files (or documents) written.
    pub tables_written: usize,
    /// Number of schema definition files copied.
    pub defs_copied: usize,
    /// Row-level statistics across all tables.
    #[serde(flatten)]
    pub merge: MergeStats,
}

impl GameStats {
    /// Create empty statistics for a game.
    #[must_use]
    pub fn new(game: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            ..Self::default()
        }
    }
}

/// Result of a whole sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Which way names flowed.
    pub direction: Direction,
    /// Whether files were left untouched.
    pub dry_run: bool,
    /// Whether split-off Japanese names are written anywhere. Smithbox has no
    /// Japanese-only table, so syncing into it only counts them.
    pub japanese_saved: bool,
    /// Per-game statistics, in processing order.
    pub games: Vec<GameStats>,
}

impl SyncReport {
    /// Create an empty report.
    #[must_use]
    pub fn new(direction: Direction, dry_run: bool) -> Self {
        Self {
            direction,
            dry_run,
            japanese_saved: direction == Direction::SmithboxToParamdex,
            games: Vec::new(),
        }
    }

    /// Row-level statistics summed over all games.
    #[must_use]
    pub fn totals(&self) -> MergeStats {
        let mut total = MergeStats::default();
        for game in &self.games {
            total.add(&game.merge);
        }
        total
    }

    /// Total number of files written.
    #[must_use]
    pub fn tables_written(&self) -> usize {
        self.games.iter().map(|g| g.tables_written).sum()
    }
}

/// Sync-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// IO error during file operations.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        /// Document being read or written.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// A line-format file holds text before its first record.
    #[error("Invalid line in {}:{line}: {content}", path.display())]
    InvalidLine {
        /// File being parsed.
        path: PathBuf,
        /// Line number (1-indexed).
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A requested game exists in neither store.
    #[error("Game not found: {0}")]
    GameNotFound(String),
}

impl SyncError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a JSON error with the document it occurred in.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result type for sync operations.
pub type SyncResult<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_stats_changes() {
        let stats = MergeStats {
            names_filled: 2,
            names_replaced: 1,
            rows_inserted: 3,
            rows_appended: 4,
            rows_dropped: 5,
            japanese_names: 6,
        };
        assert_eq!(stats.changes(), 10);
    }

    #[test]
    fn test_report_totals() {
        let mut report = SyncReport::new(Direction::SmithboxToParamdex, false);
        let mut er = GameStats::new("ER");
        er.tables_written = 2;
        er.merge.names_filled = 3;
        let mut ds3 = GameStats::new("DS3");
        ds3.tables_written = 1;
        ds3.merge.names_filled = 1;
        ds3.merge.rows_dropped = 2;
        report.games.push(er);
        report.games.push(ds3);

        let totals = report.totals();
        assert_eq!(totals.names_filled, 4);
        assert_eq!(totals.rows_dropped, 2);
        assert_eq!(report.tables_written(), 3);
    }

    #[test]
    fn test_direction_serializes_snake_case() {
        let json = serde_json::to_string(&Direction::ParamdexToSmithbox).unwrap();
        assert_eq!(json, "\"paramdex_to_smithbox\"");
    }

    #[test]
    fn test_japanese_saved_only_for_paramdex() {
        assert!(SyncReport::new(Direction::SmithboxToParamdex, false).japanese_saved);

        let report = SyncReport::new(Direction::ParamdexToSmithbox, false);
        assert!(!report.japanese_saved);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["japanese_saved"], false);
    }
}
