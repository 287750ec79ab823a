//! Row name sync between Paramdex and Smithbox.
//!
//! This module merges the two stores' row names table by table:
//!
//! - **Alignment**: two-pointer walk pairing rows by ID ([`align`])
//! - **Paramdex → Smithbox**: fill unnamed Smithbox rows ([`sync_to_smithbox`])
//! - **Smithbox → Paramdex**: rebuild Paramdex name files ([`sync_to_paramdex`])
//! - **Status**: which params each store has names for ([`get_status`])
//!
//! # Precedence
//!
//! The side being updated keeps its existing names unless overwrite mode is
//! requested. A name is never cleared by an unnamed row on the other side.
//! Rows are only ever added or kept, never reordered.
//!
//! # Example
//!
//! ```ignore
//! use rowsync::sync::{run, Direction, SyncOptions};
//!
//! let report = run(Direction::SmithboxToParamdex, &roots, &games, SyncOptions::default())?;
//! println!("{} tables written", report.tables_written());
//! ```

pub mod align;
pub mod file;
mod status;
mod to_paramdex;
mod to_smithbox;
mod types;

use crate::config::Roots;

pub use align::{MergeOutcome, Resolution, Step};
pub use file::{atomic_write, read_optional};
pub use status::{GameStatus, get_status, print_status};
pub use to_paramdex::{merge_into_paramdex, sync_to_paramdex};
pub use to_smithbox::{merge_into_smithbox, sync_to_smithbox};
pub use types::{
    Direction, GameStats, MergeStats, SyncError, SyncOptions, SyncReport, SyncResult,
};

/// Run a sync in the given direction over `games`.
///
/// Games are processed one at a time; each param is read, merged and written
/// before the next one is touched.
///
/// # Errors
///
/// Returns the first error encountered; files already written stay written.
pub fn run(
    direction: Direction,
    roots: &Roots,
    games: &[String],
    options: SyncOptions,
) -> SyncResult<SyncReport> {
    match direction {
        Direction::ParamdexToSmithbox => sync_to_smithbox(roots, games, options),
        Direction::SmithboxToParamdex => sync_to_paramdex(roots, games, options),
    }
}
