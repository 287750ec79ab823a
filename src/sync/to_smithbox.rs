//! Paramdex → Smithbox name sync.
//!
//! Smithbox is the structure side: its rows (named or not) are walked in
//! order, and Paramdex names fill in the rows whose IDs line up. Rows Paramdex
//! has past the end of a Smithbox table are appended.
//!
//! Smithbox has no Japanese-only table, so Japanese text split off from
//! Paramdex names is only counted in the report.

use tracing::{debug, info};

use crate::config::Roots;
use crate::model::Record;
use crate::model::name::display_name;
use crate::store::paramdex::{names_path, read_names};
use crate::store::{SmithboxGame, game_params};
use crate::sync::align::{MergeOutcome, Resolution, Step, align, japanese_remainder, resolve_name};
use crate::sync::types::{Direction, GameStats, SyncOptions, SyncReport, SyncResult};

/// Merge Paramdex rows into a Smithbox table.
///
/// Smithbox keeps its existing names unless `overwrite` is set; Paramdex
/// names contribute only their English half when they are bilingual.
#[must_use]
pub fn merge_into_smithbox(
    entries: Vec<Record>,
    paramdex: Vec<Record>,
    overwrite: bool,
) -> MergeOutcome {
    let steps = align(&entries, paramdex);
    let mut outcome = MergeOutcome {
        records: entries,
        ..MergeOutcome::default()
    };

    for step in steps {
        match step {
            Step::Matched { position, row } => {
                let entry = &mut outcome.records[position];
                let candidate = display_name(&row.name);
                match resolve_name(&entry.name, candidate, overwrite) {
                    Resolution::Kept => {}
                    Resolution::Filled => {
                        entry.name = candidate.to_string();
                        outcome.stats.names_filled += 1;
                    }
                    Resolution::Replaced => {
                        entry.name = candidate.to_string();
                        outcome.stats.names_replaced += 1;
                    }
                }
                if let Some(japanese) = japanese_remainder(&row.name, &entry.name) {
                    outcome.japanese.push(Record::new(row.id, japanese));
                }
            }
            Step::StructureOnly { .. } => {}
            Step::Appended(row) => {
                let index = i64::try_from(outcome.records.len()).unwrap_or(i64::MAX);
                let name = display_name(&row.name);
                if let Some(japanese) = japanese_remainder(&row.name, name) {
                    outcome.japanese.push(Record::new(row.id, japanese));
                }
                outcome
                    .records
                    .push(Record::with_index(index, row.id, name));
                outcome.stats.rows_appended += 1;
            }
            Step::Dropped(_) => outcome.stats.rows_dropped += 1,
        }
    }

    outcome.stats.japanese_names = outcome.japanese.len();
    outcome
}

/// Sync Paramdex names into Smithbox for each game.
///
/// # Errors
///
/// Returns an error on the first file that cannot be read, parsed or written.
pub fn sync_to_smithbox(
    roots: &Roots,
    games: &[String],
    options: SyncOptions,
) -> SyncResult<SyncReport> {
    let mut report = SyncReport::new(Direction::ParamdexToSmithbox, options.dry_run);
    for game in games {
        report.games.push(sync_game(roots, game, options)?);
    }
    Ok(report)
}

fn sync_game(roots: &Roots, game: &str, options: SyncOptions) -> SyncResult<GameStats> {
    let paramdex_dir = roots.paramdex_game_dir(game);
    let mut smithbox = SmithboxGame::load(&roots.smithbox_game_dir(game))?;
    let mut stats = GameStats::new(game);

    for param in game_params(roots, game, &smithbox)? {
        stats.tables += 1;

        let rows = read_names(&names_path(&paramdex_dir, &param))?;
        if rows.is_empty() {
            continue;
        }

        let outcome = merge_into_smithbox(smithbox.entries(&param).to_vec(), rows, options.overwrite);
        debug!(
            game,
            param = %param,
            filled = outcome.stats.names_filled,
            replaced = outcome.stats.names_replaced,
            appended = outcome.stats.rows_appended,
            dropped = outcome.stats.rows_dropped,
            "Merged param"
        );
        stats.merge.add(&outcome.stats);
        smithbox.set_entries(&param, outcome.records);
    }

    let written = if options.dry_run {
        smithbox.render()?.is_some()
    } else {
        smithbox.save()?
    };
    if written {
        stats.tables_written += 1;
    }

    info!(game, path = %smithbox.path().display(), written, "Converted game");
    Ok(stats)
}
